// tests/post_detail_api_tests.rs
mod common; // Reference the common module

use actix_web::{test, web, App};
use common::*;
use owlconnect_data::NewPost;
use owlconnect_server::AppState;
use serde_json::{json, Value};
use serial_test::serial;

use owlconnect_server::web::configure_app_routes;

async fn seed_post(state: &AppState, author_id: &str, content: &str) -> String {
  seed_user(state, author_id, "Author").await;
  state
    .data
    .posts()
    .create(NewPost {
      content: content.to_string(),
      media_url: None,
      media_type: None,
      user_id: author_id.to_string(),
    })
    .await
    .expect("post create should succeed")
    .id
}

#[actix_rt::test]
#[serial]
async fn test_missing_post_is_404() {
  let state = test_state().await;
  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/posts/no-such-post").to_request(),
  )
  .await;
  assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_detail_returns_post_with_comment_thread() {
  let state = test_state().await;
  let post_id = seed_post(&state, "u1", "Thread starter").await;

  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::post()
    .uri(&format!("/api/v1/posts/{}/comments", post_id))
    .insert_header(("X-User-Id", "u2"))
    .insert_header(("X-User-Name", "Barney"))
    .set_json(json!({ "content": "First reply" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 201);

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri(&format!("/api/v1/posts/{}", post_id)).to_request(),
  )
  .await;
  assert!(resp.status().is_success());
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["post"]["content"], "Thread starter");
  assert_eq!(body["post"]["author_name"], "Author");

  let comments = body["comments"].as_array().unwrap();
  assert_eq!(comments.len(), 1);
  assert_eq!(comments[0]["content"], "First reply");
  assert_eq!(comments[0]["author_name"], "Barney");
}

#[actix_rt::test]
#[serial]
async fn test_detail_like_has_its_own_notification() {
  let state = test_state().await;
  let post_id = seed_post(&state, "u1", "Like me").await;

  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let resp = test::call_service(
    &app,
    test::TestRequest::post().uri(&format!("/api/v1/posts/{}/like", post_id)).to_request(),
  )
  .await;
  assert!(resp.status().is_success());
  let body: Value = test::read_body_json(resp).await;
  // Unlike the feed's silent like, the detail page announces it.
  assert_eq!(body["message"], "Post liked!");
  assert_eq!(body["likes"], 1);
  assert_eq!(body["post"]["likes"], 1);
}

#[actix_rt::test]
#[serial]
async fn test_detail_comment_validates_and_uses_detail_notification() {
  let state = test_state().await;
  let post_id = seed_post(&state, "u1", "Comment on me").await;

  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let uri = format!("/api/v1/posts/{}/comments", post_id);

  let req = test::TestRequest::post()
    .uri(&uri)
    .insert_header(("X-User-Id", "u2"))
    .set_json(json!({ "content": "   " }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 400);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Please enter a comment");

  let req = test::TestRequest::post()
    .uri(&uri)
    .insert_header(("X-User-Id", "u2"))
    .set_json(json!({ "content": "Nice owl" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 201);
  let body: Value = test::read_body_json(resp).await;
  // The detail page's toast has no exclamation mark.
  assert_eq!(body["message"], "Comment added successfully");
  assert_eq!(body["comments"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
#[serial]
async fn test_comment_on_missing_post_is_404() {
  let state = test_state().await;
  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::post()
    .uri("/api/v1/posts/no-such-post/comments")
    .insert_header(("X-User-Id", "u2"))
    .set_json(json!({ "content": "Hello?" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_share_link_minted_only_for_existing_posts() {
  let state = test_state().await;
  let post_id = seed_post(&state, "u1", "Share me").await;

  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri(&format!("/api/v1/posts/{}/share-link", post_id)).to_request(),
  )
  .await;
  assert!(resp.status().is_success());
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["url"], format!("{}/posts/{}", TEST_BASE_URL, post_id));

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/posts/no-such-post/share-link").to_request(),
  )
  .await;
  assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_report_persists_a_moderation_record() {
  let state = test_state().await;
  let post_id = seed_post(&state, "u1", "Report me").await;

  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::post()
    .uri(&format!("/api/v1/posts/{}/report", post_id))
    .insert_header(("X-User-Id", "u2"))
    .set_json(json!({ "reason": "  spam  " }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 201);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], "Content reported successfully");

  let reports = state.data.reports().for_post(&post_id).await.unwrap();
  assert_eq!(reports.len(), 1);
  assert_eq!(reports[0].reporter_id, "u2");
  assert_eq!(reports[0].reason.as_deref(), Some("spam"));
}

#[actix_rt::test]
#[serial]
async fn test_report_missing_post_is_404() {
  let state = test_state().await;
  let app = test::init_service(
    App::new().app_data(web::Data::new(state.clone())).configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::post()
    .uri("/api/v1/posts/no-such-post/report")
    .insert_header(("X-User-Id", "u2"))
    .set_json(json!({ "reason": "spam" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 404);
}

// owlconnect_server/src/web/handlers/post_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentUser;
use crate::web::handlers::require_text;
use owlconnect_data::{NewComment, NewReport, PostThread};

#[derive(Deserialize, Debug)]
pub struct AddCommentPayload {
  pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct ReportPayload {
  pub reason: Option<String>,
}

async fn thread_or_not_found(app_state: &AppState, post_id: &str) -> Result<PostThread, AppError> {
  match app_state.data.posts().find_thread(post_id).await? {
    Some(thread) => Ok(thread),
    None => {
      warn!("Post with ID {} not found.", post_id);
      Err(AppError::NotFound(format!("Post with ID {} not found.", post_id)))
    }
  }
}

#[instrument(name = "handler::get_post", skip(app_state, path), fields(post_id = %path.as_ref()))]
pub async fn get_post_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let post_id = path.into_inner();
  let thread = thread_or_not_found(&app_state, &post_id).await?;

  info!("Fetched post {} with {} comments.", post_id, thread.comments.len());
  Ok(HttpResponse::Ok().json(thread))
}

#[instrument(name = "handler::like_post_detail", skip(app_state, path), fields(post_id = %path.as_ref()))]
pub async fn like_post_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let post_id = path.into_inner();

  let likes = app_state.data.posts().add_like(&post_id).await?;
  info!("Post {} now has {} likes.", post_id, likes);

  let thread = thread_or_not_found(&app_state, &post_id).await?;
  Ok(HttpResponse::Ok().json(json!({
    "message": "Post liked!",
    "likes": likes,
    "post": thread.post,
    "comments": thread.comments
  })))
}

#[instrument(
  name = "handler::add_comment",
  skip(app_state, path, payload, user),
  fields(post_id = %path.as_ref(), user_id = %user.id)
)]
pub async fn add_comment_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<AddCommentPayload>,
  user: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let post_id = path.into_inner();
  let content = require_text(&payload.content, "Please enter a comment")?;

  if app_state.data.posts().find_by_id(&post_id).await?.is_none() {
    warn!("Post with ID {} not found.", post_id);
    return Err(AppError::NotFound(format!("Post with ID {} not found.", post_id)));
  }

  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  let comment = app_state
    .data
    .comments()
    .create(NewComment {
      content,
      post_id: post_id.clone(),
      user_id: user.id.clone(),
    })
    .await?;
  info!("User {} commented on post {}.", user.id, post_id);

  let thread = thread_or_not_found(&app_state, &post_id).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Comment added successfully",
    "comment": comment,
    "post": thread.post,
    "comments": thread.comments
  })))
}

// The copy-to-clipboard step stays on the client; this endpoint only mints
// the canonical URL, and only for posts that exist.
#[instrument(name = "handler::share_link", skip(app_state, path), fields(post_id = %path.as_ref()))]
pub async fn share_link_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let post_id = path.into_inner();

  if app_state.data.posts().find_by_id(&post_id).await?.is_none() {
    warn!("Post with ID {} not found.", post_id);
    return Err(AppError::NotFound(format!("Post with ID {} not found.", post_id)));
  }

  let url = format!("{}/posts/{}", app_state.config.app_base_url.trim_end_matches('/'), post_id);
  Ok(HttpResponse::Ok().json(json!({ "url": url })))
}

#[instrument(
  name = "handler::report_post",
  skip(app_state, path, payload, user),
  fields(post_id = %path.as_ref(), user_id = %user.id)
)]
pub async fn report_post_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ReportPayload>,
  user: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let post_id = path.into_inner();

  if app_state.data.posts().find_by_id(&post_id).await?.is_none() {
    warn!("Post with ID {} not found.", post_id);
    return Err(AppError::NotFound(format!("Post with ID {} not found.", post_id)));
  }

  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  let reason = payload.reason.as_deref().map(str::trim).filter(|r| !r.is_empty()).map(str::to_string);
  let report = app_state
    .data
    .reports()
    .create(NewReport {
      post_id: post_id.clone(),
      reporter_id: user.id.clone(),
      reason,
    })
    .await?;
  info!("User {} reported post {} (report {}).", user.id, post_id, report.id);

  Ok(HttpResponse::Created().json(json!({
    "message": "Content reported successfully",
    "report": report
  })))
}

// owlconnect_server/src/web/handlers/feed_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::CurrentUser;
use crate::web::handlers::{media_type_for, require_text, MediaUpload};
use owlconnect_data::{NewComment, NewPost, PostOrder};

/// The feed's sort context. Mutation routes accept it too, so the
/// refreshed list honors whatever order the page is currently showing.
#[derive(Deserialize, Debug, Default)]
pub struct FeedQuery {
  pub sort: Option<PostOrder>,
}

#[derive(Deserialize, Debug)]
pub struct CreatePostPayload {
  pub content: String,
  pub media: Option<MediaUpload>,
}

#[derive(Deserialize, Debug)]
pub struct AddCommentPayload {
  pub content: String,
}

#[instrument(name = "handler::list_feed", skip(app_state, query))]
pub async fn list_feed_handler(
  app_state: web::Data<AppState>,
  query: web::Query<FeedQuery>,
) -> Result<HttpResponse, AppError> {
  let order = query.sort.unwrap_or_default();
  let posts = app_state.data.posts().find_many(order).await?;

  info!("Fetched {} feed posts.", posts.len());
  Ok(HttpResponse::Ok().json(json!({ "posts": posts })))
}

#[instrument(
  name = "handler::create_post",
  skip(app_state, payload, query, user),
  fields(user_id = %user.id, has_media = payload.media.is_some())
)]
pub async fn create_post_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreatePostPayload>,
  query: web::Query<FeedQuery>,
  user: CurrentUser,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let content = require_text(&payload.content, "Post content cannot be empty")?;

  // The author row must exist before the post references it.
  app_state.data.users().upsert(&user.id, &user.name, user.picture_url.as_deref()).await?;

  // Media goes to the object store first; the post only carries the URL.
  let (media_url, media_type) = match &payload.media {
    Some(media) => {
      let stored = app_state.uploads.put(&media.file_name, &media.decode()?).await?;
      let media_type = media_type_for(&stored.content_type);
      (Some(stored.url), Some(media_type))
    }
    None => (None, None),
  };

  let post = app_state
    .data
    .posts()
    .create(NewPost {
      content,
      media_url,
      media_type,
      user_id: user.id.clone(),
    })
    .await?;
  info!("Created post {} for user {}.", post.id, user.id);

  let posts = app_state.data.posts().find_many(query.sort.unwrap_or_default()).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Post created successfully!",
    "post": post,
    "posts": posts
  })))
}

// The feed's like button shows no success notification; the response only
// carries the new count and the refreshed list.
#[instrument(name = "handler::like_post", skip(app_state, path, query), fields(post_id = %path.as_ref()))]
pub async fn like_post_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  query: web::Query<FeedQuery>,
) -> Result<HttpResponse, AppError> {
  let post_id = path.into_inner();

  let likes = app_state.data.posts().add_like(&post_id).await?;
  info!("Post {} now has {} likes.", post_id, likes);

  let posts = app_state.data.posts().find_many(query.sort.unwrap_or_default()).await?;
  Ok(HttpResponse::Ok().json(json!({ "likes": likes, "posts": posts })))
}

#[instrument(
  name = "handler::add_feed_comment",
  skip(app_state, path, payload, query, user),
  fields(post_id = %path.as_ref(), user_id = %user.id)
)]
pub async fn add_comment_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<AddCommentPayload>,
  query: web::Query<FeedQuery>,
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

  let posts = app_state.data.posts().find_many(query.sort.unwrap_or_default()).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Comment added successfully!",
    "comment": comment,
    "posts": posts
  })))
}

// owlconnect_data/src/models/post.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};

use super::comment::CommentWithAuthor;

/// How an attachment is rendered. Decided once from the uploaded file's
/// MIME type: anything in `video/*` is a video, everything else an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
  Image,
  Video,
}

/// Feed sort order: a single descending field, newest or most-liked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostOrder {
  #[default]
  Recent,
  Popular,
}

#[derive(Debug, Clone)]
pub struct NewPost {
  pub content: String,
  pub media_url: Option<String>,
  pub media_type: Option<MediaType>,
  pub user_id: String,
}

/// A post joined with its author, as the feed renders it. New posts start
/// with zero likes and an unset ("0") rating.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostWithAuthor {
  pub id: String,
  pub content: String,
  pub media_url: Option<String>,
  pub media_type: Option<MediaType>,
  pub likes: i64,
  pub rating: String,
  pub user_id: String,
  pub created_at: DateTime<Utc>,
  pub author_name: String,
  pub author_picture_url: Option<String>,
}

/// A post plus its full comment thread, as the detail page renders it.
#[derive(Debug, Clone, Serialize)]
pub struct PostThread {
  pub post: PostWithAuthor,
  pub comments: Vec<CommentWithAuthor>,
}

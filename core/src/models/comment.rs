// owlconnect_data/src/models/comment.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct NewComment {
  pub content: String,
  pub post_id: String,
  pub user_id: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentWithAuthor {
  pub id: String,
  pub content: String,
  pub post_id: String,
  pub user_id: String,
  pub created_at: DateTime<Utc>,
  pub author_name: String,
  pub author_picture_url: Option<String>,
}

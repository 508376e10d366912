// owlconnect_data/src/store/comments.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::{CommentWithAuthor, NewComment};

const COMMENT_WITH_AUTHOR: &str = "SELECT c.id, c.content, c.post_id, c.user_id, c.created_at, \
   u.name AS author_name, u.picture_url AS author_picture_url \
   FROM comments c JOIN users u ON u.id = c.user_id";

#[derive(Clone)]
pub struct CommentStore {
  pool: SqlitePool,
}

impl CommentStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Thread query, oldest first.
  #[instrument(name = "comments::for_post", skip(self))]
  pub async fn for_post(&self, post_id: &str) -> DataResult<Vec<CommentWithAuthor>> {
    let sql = format!("{COMMENT_WITH_AUTHOR} WHERE c.post_id = ?1 ORDER BY c.created_at ASC");
    let comments = sqlx::query_as(&sql).bind(post_id).fetch_all(&self.pool).await?;
    Ok(comments)
  }

  #[instrument(name = "comments::create", skip(self, new_comment), fields(post_id = %new_comment.post_id))]
  pub async fn create(&self, new_comment: NewComment) -> DataResult<CommentWithAuthor> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
      "INSERT INTO comments (id, content, post_id, user_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&id)
    .bind(&new_comment.content)
    .bind(&new_comment.post_id)
    .bind(&new_comment.user_id)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    let sql = format!("{COMMENT_WITH_AUTHOR} WHERE c.id = ?1");
    sqlx::query_as(&sql)
      .bind(&id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or(DataError::NotFound { entity: "comment", id })
  }
}

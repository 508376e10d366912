// owlconnect_data/src/store/posts.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::{NewPost, PostOrder, PostThread, PostWithAuthor};

const POST_WITH_AUTHOR: &str = "SELECT p.id, p.content, p.media_url, p.media_type, p.likes, p.rating, p.user_id, p.created_at, \
   u.name AS author_name, u.picture_url AS author_picture_url \
   FROM posts p JOIN users u ON u.id = p.user_id";

const COMMENT_WITH_AUTHOR: &str = "SELECT c.id, c.content, c.post_id, c.user_id, c.created_at, \
   u.name AS author_name, u.picture_url AS author_picture_url \
   FROM comments c JOIN users u ON u.id = c.user_id";

#[derive(Clone)]
pub struct PostStore {
  pool: SqlitePool,
}

impl PostStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Feed query: posts with their author, newest or most-liked first.
  #[instrument(name = "posts::find_many", skip(self))]
  pub async fn find_many(&self, order: PostOrder) -> DataResult<Vec<PostWithAuthor>> {
    let sql = match order {
      PostOrder::Recent => format!("{POST_WITH_AUTHOR} ORDER BY p.created_at DESC"),
      PostOrder::Popular => format!("{POST_WITH_AUTHOR} ORDER BY p.likes DESC"),
    };
    let posts = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
    Ok(posts)
  }

  #[instrument(name = "posts::find_by_id", skip(self))]
  pub async fn find_by_id(&self, id: &str) -> DataResult<Option<PostWithAuthor>> {
    let sql = format!("{POST_WITH_AUTHOR} WHERE p.id = ?1");
    let post = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
    Ok(post)
  }

  /// Detail query: the post plus its comment thread, oldest comment first.
  #[instrument(name = "posts::find_thread", skip(self))]
  pub async fn find_thread(&self, id: &str) -> DataResult<Option<PostThread>> {
    let Some(post) = self.find_by_id(id).await? else {
      return Ok(None);
    };

    let sql = format!("{COMMENT_WITH_AUTHOR} WHERE c.post_id = ?1 ORDER BY c.created_at ASC");
    let comments = sqlx::query_as(&sql).bind(id).fetch_all(&self.pool).await?;

    Ok(Some(PostThread { post, comments }))
  }

  /// Inserts a post and reads it back joined with its author. Likes start
  /// at zero; the rating starts unset.
  #[instrument(name = "posts::create", skip(self, new_post), fields(user_id = %new_post.user_id))]
  pub async fn create(&self, new_post: NewPost) -> DataResult<PostWithAuthor> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
      "INSERT INTO posts (id, content, media_url, media_type, likes, rating, user_id, created_at) \
       VALUES (?1, ?2, ?3, ?4, 0, '0', ?5, ?6)",
    )
    .bind(&id)
    .bind(&new_post.content)
    .bind(&new_post.media_url)
    .bind(new_post.media_type)
    .bind(&new_post.user_id)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    self
      .find_by_id(&id)
      .await?
      .ok_or(DataError::NotFound { entity: "post", id })
  }

  /// Atomic like: the counter is incremented in the database, never
  /// computed from a value the caller read earlier. Returns the count
  /// after this like.
  #[instrument(name = "posts::add_like", skip(self))]
  pub async fn add_like(&self, id: &str) -> DataResult<i64> {
    let likes: Option<i64> =
      sqlx::query_scalar("UPDATE posts SET likes = likes + 1 WHERE id = ?1 RETURNING likes")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

    likes.ok_or_else(|| DataError::NotFound {
      entity: "post",
      id: id.to_string(),
    })
  }
}

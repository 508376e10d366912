// owlconnect_data/src/store/users.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::error::{DataError, DataResult};
use crate::models::User;

#[derive(Clone)]
pub struct UserStore {
  pool: SqlitePool,
}

impl UserStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Mirrors the session user so authored rows can join to a name and
  /// picture. Called on every write action; an existing row is refreshed
  /// with the latest name and picture.
  #[instrument(name = "users::upsert", skip(self, picture_url))]
  pub async fn upsert(&self, id: &str, name: &str, picture_url: Option<&str>) -> DataResult<User> {
    sqlx::query(
      "INSERT INTO users (id, name, picture_url, created_at) VALUES (?1, ?2, ?3, ?4) \
       ON CONFLICT(id) DO UPDATE SET name = excluded.name, picture_url = excluded.picture_url",
    )
    .bind(id)
    .bind(name)
    .bind(picture_url)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    self.find_by_id(id).await?.ok_or_else(|| DataError::NotFound {
      entity: "user",
      id: id.to_string(),
    })
  }

  #[instrument(name = "users::find_by_id", skip(self))]
  pub async fn find_by_id(&self, id: &str) -> DataResult<Option<User>> {
    let user = sqlx::query_as("SELECT id, name, picture_url, created_at FROM users WHERE id = ?1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(user)
  }
}

// owlconnect_data/src/store/messages.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::{Message, NewMessage};

const MESSAGE_COLUMNS: &str = "SELECT id, content, sender_id, receiver_id, product_id, created_at FROM messages";

#[derive(Clone)]
pub struct MessageStore {
  pool: SqlitePool,
}

impl MessageStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  #[instrument(
    name = "messages::create",
    skip(self, new_message),
    fields(sender_id = %new_message.sender_id, receiver_id = %new_message.receiver_id)
  )]
  pub async fn create(&self, new_message: NewMessage) -> DataResult<Message> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
      "INSERT INTO messages (id, content, sender_id, receiver_id, product_id, created_at) \
       VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&id)
    .bind(&new_message.content)
    .bind(&new_message.sender_id)
    .bind(&new_message.receiver_id)
    .bind(&new_message.product_id)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    let sql = format!("{MESSAGE_COLUMNS} WHERE id = ?1");
    sqlx::query_as(&sql)
      .bind(&id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or(DataError::NotFound { entity: "message", id })
  }

  /// Everything sent about one listing, oldest first.
  #[instrument(name = "messages::for_product", skip(self))]
  pub async fn for_product(&self, product_id: &str) -> DataResult<Vec<Message>> {
    let sql = format!("{MESSAGE_COLUMNS} WHERE product_id = ?1 ORDER BY created_at ASC");
    let messages = sqlx::query_as(&sql).bind(product_id).fetch_all(&self.pool).await?;
    Ok(messages)
  }
}

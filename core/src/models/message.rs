// owlconnect_data/src/models/message.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct NewMessage {
  pub content: String,
  pub sender_id: String,
  pub receiver_id: String,
  pub product_id: String,
}

/// A buyer/seller message. Always tied to the product listing it is about.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Message {
  pub id: String,
  pub content: String,
  pub sender_id: String,
  pub receiver_id: String,
  pub product_id: String,
  pub created_at: DateTime<Utc>,
}

// owlconnect_data/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, Type as SqlxType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SqlxType)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
  Pending,
  Completed,
  Cancelled,
}

/// What an order pays for. Exactly one target per order; the type makes a
/// zero- or double-target order unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderTarget {
  Product(String),
  Merchandise(String),
}

#[derive(Debug, Clone)]
pub struct NewOrder {
  pub buyer_id: String,
  pub seller_id: String,
  /// Snapshot of the listed price at purchase time, as a decimal string.
  pub amount: String,
  pub target: OrderTarget,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: String,
  pub status: OrderStatus,
  pub amount: String,
  pub buyer_id: String,
  pub seller_id: String,
  pub product_id: Option<String>,
  pub merchandise_id: Option<String>,
  pub created_at: DateTime<Utc>,
}

// owlconnect_data/src/models/merchandise.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::error::DataError;

#[derive(Debug, Clone)]
pub struct NewMerchandise {
  pub name: String,
  pub description: String,
  /// Token cost as a decimal string.
  pub price: String,
  pub image_url: Option<String>,
  pub is_customizable: bool,
}

/// A store catalog item, priced in tokens. Customizable items accept an
/// uploaded photo during purchase.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Merchandise {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: String,
  pub image_url: Option<String>,
  pub is_customizable: bool,
  pub created_at: DateTime<Utc>,
}

impl Merchandise {
  pub fn price_decimal(&self) -> Result<Decimal, DataError> {
    super::parse_decimal("merchandise.price", &self.price)
  }
}

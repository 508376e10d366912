// owlconnect_data/src/models/token_balance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::error::DataError;

/// A user's token balance. Purchases gate on it but never debit it; only
/// grants (seeding, promotions) change the stored value.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TokenBalance {
  pub id: String,
  pub user_id: String,
  pub balance: String,
  pub created_at: DateTime<Utc>,
}

impl TokenBalance {
  pub fn balance_decimal(&self) -> Result<Decimal, DataError> {
    super::parse_decimal("token_balances.balance", &self.balance)
  }
}

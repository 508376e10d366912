// owlconnect_data/src/store/tokens.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::TokenBalance;

const BALANCE_COLUMNS: &str = "SELECT id, user_id, balance, created_at FROM token_balances";

#[derive(Clone)]
pub struct TokenStore {
  pool: SqlitePool,
}

impl TokenStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// The balance record backing the store page. `None` when the user has
  /// never been granted tokens; the page treats that as a balance of "0".
  #[instrument(name = "tokens::balance_for", skip(self))]
  pub async fn balance_for(&self, user_id: &str) -> DataResult<Option<TokenBalance>> {
    let sql = format!("{BALANCE_COLUMNS} WHERE user_id = ?1");
    let balance = sqlx::query_as(&sql).bind(user_id).fetch_optional(&self.pool).await?;
    Ok(balance)
  }

  /// Grants tokens: creates or replaces the user's balance record.
  #[instrument(name = "tokens::set_balance", skip(self))]
  pub async fn set_balance(&self, user_id: &str, balance: &str) -> DataResult<TokenBalance> {
    sqlx::query(
      "INSERT INTO token_balances (id, user_id, balance, created_at) VALUES (?1, ?2, ?3, ?4) \
       ON CONFLICT(user_id) DO UPDATE SET balance = excluded.balance",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(balance)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    self
      .balance_for(user_id)
      .await?
      .ok_or_else(|| DataError::NotFound {
        entity: "token_balance",
        id: user_id.to_string(),
      })
  }
}

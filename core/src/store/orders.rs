// owlconnect_data/src/store/orders.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::{NewOrder, Order, OrderStatus, OrderTarget};

const ORDER_COLUMNS: &str = "SELECT id, status, amount, buyer_id, seller_id, product_id, merchandise_id, created_at FROM orders";

#[derive(Clone)]
pub struct OrderStore {
  pool: SqlitePool,
}

impl OrderStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Inserts a PENDING order for the target's listed price and reads it
  /// back.
  #[instrument(
    name = "orders::create",
    skip(self, new_order),
    fields(buyer_id = %new_order.buyer_id, seller_id = %new_order.seller_id)
  )]
  pub async fn create(&self, new_order: NewOrder) -> DataResult<Order> {
    let (product_id, merchandise_id) = match &new_order.target {
      OrderTarget::Product(id) => (Some(id.as_str()), None),
      OrderTarget::Merchandise(id) => (None, Some(id.as_str())),
    };

    let id = Uuid::new_v4().to_string();
    sqlx::query(
      "INSERT INTO orders (id, status, amount, buyer_id, seller_id, product_id, merchandise_id, created_at) \
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(&id)
    .bind(OrderStatus::Pending)
    .bind(&new_order.amount)
    .bind(&new_order.buyer_id)
    .bind(&new_order.seller_id)
    .bind(product_id)
    .bind(merchandise_id)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    self
      .find_by_id(&id)
      .await?
      .ok_or(DataError::NotFound { entity: "order", id })
  }

  #[instrument(name = "orders::find_by_id", skip(self))]
  pub async fn find_by_id(&self, id: &str) -> DataResult<Option<Order>> {
    let sql = format!("{ORDER_COLUMNS} WHERE id = ?1");
    let order = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
    Ok(order)
  }

  /// Order history as the product page shows it: rows where the given user
  /// sits on either side of the trade, scoped to one product. This is the
  /// one disjunctive query the contract carries.
  #[instrument(name = "orders::find_for_participant", skip(self))]
  pub async fn find_for_participant(&self, user_id: &str, product_id: &str) -> DataResult<Vec<Order>> {
    let sql = format!(
      "{ORDER_COLUMNS} WHERE product_id = ?1 AND (buyer_id = ?2 OR seller_id = ?2) ORDER BY created_at DESC"
    );
    let orders = sqlx::query_as(&sql)
      .bind(product_id)
      .bind(user_id)
      .fetch_all(&self.pool)
      .await?;
    Ok(orders)
  }
}

// owlconnect_data/src/store/merchandise.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::{Merchandise, NewMerchandise};

const MERCHANDISE_COLUMNS: &str =
  "SELECT id, name, description, price, image_url, is_customizable, created_at FROM merchandise";

#[derive(Clone)]
pub struct MerchandiseStore {
  pool: SqlitePool,
}

impl MerchandiseStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Catalog listing, alphabetical.
  #[instrument(name = "merchandise::find_many", skip(self))]
  pub async fn find_many(&self) -> DataResult<Vec<Merchandise>> {
    let sql = format!("{MERCHANDISE_COLUMNS} ORDER BY name ASC");
    let items = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
    Ok(items)
  }

  #[instrument(name = "merchandise::find_by_id", skip(self))]
  pub async fn find_by_id(&self, id: &str) -> DataResult<Option<Merchandise>> {
    let sql = format!("{MERCHANDISE_COLUMNS} WHERE id = ?1");
    let item = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
    Ok(item)
  }

  #[instrument(name = "merchandise::create", skip(self, new_item), fields(name = %new_item.name))]
  pub async fn create(&self, new_item: NewMerchandise) -> DataResult<Merchandise> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
      "INSERT INTO merchandise (id, name, description, price, image_url, is_customizable, created_at) \
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(&id)
    .bind(&new_item.name)
    .bind(&new_item.description)
    .bind(&new_item.price)
    .bind(&new_item.image_url)
    .bind(new_item.is_customizable)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    self
      .find_by_id(&id)
      .await?
      .ok_or(DataError::NotFound { entity: "merchandise", id })
  }
}

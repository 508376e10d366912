// owlconnect_data/src/store/products.rs

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::{NewProduct, ProductFilter, ProductStatus, ProductWithSeller};

const PRODUCT_WITH_SELLER: &str = "SELECT p.id, p.title, p.description, p.price, p.category, p.breed, p.image_url, p.status, p.user_id, p.created_at, \
   u.name AS seller_name, u.picture_url AS seller_picture_url \
   FROM products p JOIN users u ON u.id = p.user_id";

#[derive(Clone)]
pub struct ProductStore {
  pool: SqlitePool,
}

impl ProductStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Marketplace query: every filter predicate is ANDed. The search term
  /// matches as a literal, case-insensitive substring of the title.
  #[instrument(
    name = "products::find_many",
    skip(self, filter),
    fields(search = ?filter.search, category = ?filter.category, breed = ?filter.breed)
  )]
  pub async fn find_many(&self, filter: &ProductFilter) -> DataResult<Vec<ProductWithSeller>> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(PRODUCT_WITH_SELLER);
    query.push(" WHERE 1 = 1");

    if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
      query.push(" AND LOWER(p.title) LIKE ");
      query.push_bind(format!("%{}%", super::escape_like(&term.to_lowercase())));
      query.push(" ESCAPE '\\'");
    }
    if let Some(category) = filter.category.as_deref() {
      query.push(" AND p.category = ");
      query.push_bind(category.to_string());
    }
    if let Some(breed) = filter.breed.as_deref() {
      query.push(" AND p.breed = ");
      query.push_bind(breed.to_string());
    }

    query.push(" ORDER BY p.created_at DESC");

    let products: Vec<ProductWithSeller> = query.build_query_as().fetch_all(&self.pool).await?;
    Ok(products)
  }

  #[instrument(name = "products::find_by_id", skip(self))]
  pub async fn find_by_id(&self, id: &str) -> DataResult<Option<ProductWithSeller>> {
    let sql = format!("{PRODUCT_WITH_SELLER} WHERE p.id = ?1");
    let product = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
    Ok(product)
  }

  /// Inserts a listing (status AVAILABLE) and reads it back with its seller.
  #[instrument(name = "products::create", skip(self, new_product), fields(user_id = %new_product.user_id))]
  pub async fn create(&self, new_product: NewProduct) -> DataResult<ProductWithSeller> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
      "INSERT INTO products (id, title, description, price, category, breed, image_url, status, user_id, created_at) \
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )
    .bind(&id)
    .bind(&new_product.title)
    .bind(&new_product.description)
    .bind(&new_product.price)
    .bind(&new_product.category)
    .bind(&new_product.breed)
    .bind(&new_product.image_url)
    .bind(ProductStatus::Available)
    .bind(&new_product.user_id)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    self
      .find_by_id(&id)
      .await?
      .ok_or(DataError::NotFound { entity: "product", id })
  }
}

// owlconnect_data/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, Type as SqlxType};

/// Listing categories the marketplace filter offers.
pub const CATEGORIES: [&str; 5] = ["Live Owls", "Accessories", "Food", "Cages", "Other"];

/// Owl breeds the marketplace filter offers.
pub const BREEDS: [&str; 5] = [
  "Barn Owl",
  "Snowy Owl",
  "Great Horned Owl",
  "Screech Owl",
  "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SqlxType)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
  Available,
  Sold,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
  pub title: String,
  pub description: String,
  /// Decimal-as-string; callers validate before handing it over.
  pub price: String,
  pub category: String,
  pub breed: Option<String>,
  pub image_url: Option<String>,
  pub user_id: String,
}

/// Conjunctive marketplace filter. `search` is a case-insensitive literal
/// substring match on the title; `category` and `breed` are exact.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
  pub search: Option<String>,
  pub category: Option<String>,
  pub breed: Option<String>,
}

/// A listing joined with its seller, as the marketplace renders it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductWithSeller {
  pub id: String,
  pub title: String,
  pub description: String,
  pub price: String,
  pub category: String,
  pub breed: Option<String>,
  pub image_url: Option<String>,
  pub status: ProductStatus,
  pub user_id: String,
  pub created_at: DateTime<Utc>,
  pub seller_name: String,
  pub seller_picture_url: Option<String>,
}

// owlconnect_data/src/models/mod.rs

//! Data structures representing database entities and their read models.
//!
//! Pages never query posts, comments or products without their author, so
//! those entities are materialized as JOINed view structs
//! (`PostWithAuthor`, `CommentWithAuthor`, `ProductWithSeller`).

pub mod comment;
pub mod merchandise;
pub mod message;
pub mod order;
pub mod post;
pub mod product;
pub mod report;
pub mod token_balance;
pub mod user;

// Re-export the model structs for convenient access
pub use comment::{CommentWithAuthor, NewComment};
pub use merchandise::{Merchandise, NewMerchandise};
pub use message::{Message, NewMessage};
pub use order::{NewOrder, Order, OrderStatus, OrderTarget};
pub use post::{MediaType, NewPost, PostOrder, PostThread, PostWithAuthor};
pub use product::{NewProduct, ProductFilter, ProductStatus, ProductWithSeller, BREEDS, CATEGORIES};
pub use report::{NewReport, Report};
pub use token_balance::TokenBalance;
pub use user::User;

use rust_decimal::Decimal;

use crate::error::DataError;

// Prices and balances are decimal strings in the database; comparisons
// must never go through floats.
pub(crate) fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, DataError> {
  value.trim().parse::<Decimal>().map_err(|_| DataError::InvalidDecimal {
    field,
    value: value.to_string(),
  })
}

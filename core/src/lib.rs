// src/lib.rs

//! OwlConnect data-access layer.
//!
//! A typed client over the platform's embedded SQLite database, with one
//! store per entity and a small, uniform contract:
//!  - Queries return JOINed read models (`PostWithAuthor`,
//!    `ProductWithSeller`, `PostThread`); pages never see an author-less
//!    post or a seller-less listing.
//!  - Filters are conjunctive: exact matches plus a case-insensitive,
//!    literal substring search; ordering is a single descending field.
//!  - Mutations insert and then read the committed row back, so callers
//!    always refetch what the database holds rather than patching local
//!    copies.
//!  - Like counting is atomic (`PostStore::add_like`): the counter is
//!    incremented in the database, never computed by callers.
//!  - Prices and token balances are decimal strings end to end; comparisons
//!    go through `rust_decimal`, never floats.

// Declare modules according to the planned structure
pub mod db;
pub mod error;
pub mod models;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::db::Database;
pub use crate::error::{DataError, DataResult};

pub use crate::models::{
  CommentWithAuthor, MediaType, Merchandise, Message, NewComment, NewMerchandise, NewMessage,
  NewOrder, NewPost, NewProduct, NewReport, Order, OrderStatus, OrderTarget, PostOrder, PostThread,
  PostWithAuthor, ProductFilter, ProductStatus, ProductWithSeller, Report, TokenBalance, User,
  BREEDS, CATEGORIES,
};

pub use crate::store::{
  CommentStore, MerchandiseStore, MessageStore, OrderStore, PostStore, ProductStore, ReportStore,
  TokenStore, UserStore,
};

// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use owlconnect_data::{Database, NewMerchandise, NewProduct};
use owlconnect_server::services::MemoryObjectStore;
use owlconnect_server::{AppConfig, AppState};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub const TEST_BASE_URL: &str = "http://testserver";

fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 8080,
    database_path: ":memory:".to_string(),
    uploads_dir: "unused-in-tests".to_string(),
    app_base_url: TEST_BASE_URL.to_string(),
    seed_db: false,
  }
}

/// Application state over a fresh in-memory database and an in-memory
/// object store. Each test builds its own actix App around this.
pub async fn test_state() -> AppState {
  setup_tracing();
  let data = Database::open_in_memory().await.expect("in-memory database should open");
  AppState {
    data,
    uploads: Arc::new(MemoryObjectStore::new(TEST_BASE_URL)),
    config: Arc::new(test_config()),
  }
}

pub async fn seed_user(state: &AppState, id: &str, name: &str) {
  state
    .data
    .users()
    .upsert(id, name, None)
    .await
    .expect("user upsert should succeed");
}

pub async fn seed_product(state: &AppState, seller_id: &str, title: &str, price: &str, category: &str) -> String {
  seed_user(state, seller_id, "Seller").await;
  state
    .data
    .products()
    .create(NewProduct {
      title: title.to_string(),
      description: format!("Description for {}", title),
      price: price.to_string(),
      category: category.to_string(),
      breed: None,
      image_url: None,
      user_id: seller_id.to_string(),
    })
    .await
    .expect("product create should succeed")
    .id
}

pub async fn seed_merch(state: &AppState, name: &str, price: &str, is_customizable: bool) -> String {
  state
    .data
    .merchandise()
    .create(NewMerchandise {
      name: name.to_string(),
      description: format!("Description for {}", name),
      price: price.to_string(),
      image_url: None,
      is_customizable,
    })
    .await
    .expect("merchandise create should succeed")
    .id
}

/// Total order rows, counted straight off the pool.
pub async fn count_orders(state: &AppState) -> i64 {
  sqlx::query_scalar("SELECT COUNT(*) FROM orders")
    .fetch_one(state.data.pool())
    .await
    .expect("order count query should succeed")
}

pub fn encode_base64(bytes: &[u8]) -> String {
  // Tests build upload payloads the same way clients do.
  use base64::Engine;
  base64::engine::general_purpose::STANDARD.encode(bytes)
}

// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use owlconnect_data::{Database, NewComment, NewMerchandise, NewPost, NewProduct};
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

/// Fresh in-memory database with migrations applied.
pub async fn test_db() -> Database {
  setup_tracing();
  Database::open_in_memory()
    .await
    .expect("in-memory database should open")
}

pub async fn seed_user(db: &Database, id: &str, name: &str) {
  db.users()
    .upsert(id, name, None)
    .await
    .expect("user upsert should succeed");
}

pub fn new_post(user_id: &str, content: &str) -> NewPost {
  NewPost {
    content: content.to_string(),
    media_url: None,
    media_type: None,
    user_id: user_id.to_string(),
  }
}

pub fn new_comment(user_id: &str, post_id: &str, content: &str) -> NewComment {
  NewComment {
    content: content.to_string(),
    post_id: post_id.to_string(),
    user_id: user_id.to_string(),
  }
}

pub fn new_product(user_id: &str, title: &str, price: &str, category: &str) -> NewProduct {
  NewProduct {
    title: title.to_string(),
    description: format!("Description for {}", title),
    price: price.to_string(),
    category: category.to_string(),
    breed: None,
    image_url: None,
    user_id: user_id.to_string(),
  }
}

pub fn new_merch(name: &str, price: &str, is_customizable: bool) -> NewMerchandise {
  NewMerchandise {
    name: name.to_string(),
    description: format!("Description for {}", name),
    price: price.to_string(),
    image_url: None,
    is_customizable,
  }
}

/// Nudges the clock so consecutive rows get strictly increasing
/// created_at values.
pub async fn tick() {
  tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}

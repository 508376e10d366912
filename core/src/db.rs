// owlconnect_data/src/db.rs

//! Connection handling for the embedded SQLite database.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::DataResult;
use crate::store::{
  CommentStore, MerchandiseStore, MessageStore, OrderStore, PostStore, ProductStore, ReportStore,
  TokenStore, UserStore,
};

/// Shared handle over the SQLite pool. Cheap to clone; every per-entity
/// store accessor hands out a client over the same pool.
#[derive(Clone)]
pub struct Database {
  pool: SqlitePool,
}

impl Database {
  /// Opens (creating if missing) the database file at `path`, enables WAL
  /// journaling and foreign keys, and applies pending migrations.
  pub async fn open(path: &str) -> DataResult<Self> {
    if let Some(parent) = std::path::Path::new(path).parent() {
      if !parent.as_os_str().is_empty() {
        tokio::fs::create_dir_all(parent).await?;
      }
    }

    let options = SqliteConnectOptions::new()
      .filename(path)
      .create_if_missing(true)
      .journal_mode(SqliteJournalMode::Wal)
      .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
      .max_connections(5)
      .connect_with(options)
      .await?;

    let db = Self { pool };
    db.migrate().await?;
    info!("Database ready at '{}'.", path);
    Ok(db)
  }

  /// In-memory database for tests and examples. A single connection keeps
  /// every query on the same memory instance.
  pub async fn open_in_memory() -> DataResult<Self> {
    let options = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);

    let pool = SqlitePoolOptions::new()
      .max_connections(1)
      .connect_with(options)
      .await?;

    let db = Self { pool };
    db.migrate().await?;
    Ok(db)
  }

  async fn migrate(&self) -> DataResult<()> {
    sqlx::migrate!("./migrations").run(&self.pool).await?;
    Ok(())
  }

  /// The raw pool, for callers that need to step outside the stores.
  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }

  pub fn users(&self) -> UserStore {
    UserStore::new(self.pool.clone())
  }

  pub fn posts(&self) -> PostStore {
    PostStore::new(self.pool.clone())
  }

  pub fn comments(&self) -> CommentStore {
    CommentStore::new(self.pool.clone())
  }

  pub fn products(&self) -> ProductStore {
    ProductStore::new(self.pool.clone())
  }

  pub fn orders(&self) -> OrderStore {
    OrderStore::new(self.pool.clone())
  }

  pub fn messages(&self) -> MessageStore {
    MessageStore::new(self.pool.clone())
  }

  pub fn merchandise(&self) -> MerchandiseStore {
    MerchandiseStore::new(self.pool.clone())
  }

  pub fn tokens(&self) -> TokenStore {
    TokenStore::new(self.pool.clone())
  }

  pub fn reports(&self) -> ReportStore {
    ReportStore::new(self.pool.clone())
  }
}

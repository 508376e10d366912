// owlconnect_data/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("Invalid decimal in {field}: '{value}'")]
  InvalidDecimal { field: &'static str, value: String },

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),
}

impl DataError {
  /// True for the variant a web layer would render as a 404 rather than a 500.
  pub fn is_not_found(&self) -> bool {
    matches!(self, DataError::NotFound { .. })
  }
}

pub type DataResult<T, E = DataError> = std::result::Result<T, E>;

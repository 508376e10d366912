// owlconnect_server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use owlconnect_data::DataError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Insufficient Tokens: {0}")]
  InsufficientTokens(String),

  #[error("Upload Error: {0}")]
  Upload(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Data Layer Error: {source}")]
  Data {
    #[from] // Allows conversion from owlconnect_data::DataError
    source: DataError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience in handlers
// This is useful if handlers use `?` on functions returning anyhow::Result
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<DataError>() {
      // We already have `From<DataError>`, but this handles if it was wrapped in anyhow
      match err.downcast::<DataError>() {
        Ok(data_err) => return AppError::Data { source: data_err },
        Err(err) => return AppError::Internal(err.to_string()),
      }
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::InsufficientTokens(m) => HttpResponse::PaymentRequired().json(json!({"error": m})),
      AppError::Upload(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Upload failed", "detail": m}))
      }
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Data { source } => {
        // A lookup that came back empty is the caller's 404, not our 500.
        if source.is_not_found() {
          HttpResponse::NotFound().json(json!({"error": source.to_string()}))
        } else {
          HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
        }
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

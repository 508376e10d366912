// owlconnect_server/src/web/handlers/mod.rs

// Declare handler modules
pub mod feed_handlers;
pub mod landing_handlers;
pub mod marketplace_handlers;
pub mod post_handlers;
pub mod product_handlers;
pub mod store_handlers;
pub mod upload_handlers;

use base64::Engine;
use owlconnect_data::MediaType;
use serde::Deserialize;

use crate::errors::{AppError, Result as AppResult};

/// An uploaded file as it travels inside a JSON body.
#[derive(Debug, Deserialize)]
pub struct MediaUpload {
  pub file_name: String,
  pub data_base64: String,
}

impl MediaUpload {
  pub fn decode(&self) -> AppResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
      .decode(self.data_base64.trim())
      .map_err(|e| AppError::Validation(format!("Invalid base64 media payload: {}", e)))
  }
}

/// Anything whose MIME type sits under `video/` renders as a video;
/// everything else is treated as an image.
pub(crate) fn media_type_for(content_type: &str) -> MediaType {
  if content_type.starts_with("video") {
    MediaType::Video
  } else {
    MediaType::Image
  }
}

/// Trims a required text field. The empty result is rejected with the
/// page's own notification text.
pub(crate) fn require_text(value: &str, message: &str) -> AppResult<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(AppError::Validation(message.to_string()));
  }
  Ok(trimmed.to_string())
}

// owlconnect_server/src/web/extractors.rs

use actix_web::{FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;

/// The caller's identity, taken from request headers. There is no session
/// layer here; the reverse proxy in front of the app is expected to have
/// authenticated the user and forwarded who they are.
///
/// Handlers that merely *prefer* a user take `Option<CurrentUser>` and pick
/// their own error message for the anonymous case.
#[derive(Debug, Clone)]
pub struct CurrentUser {
  pub id: String,
  pub name: String,
  pub picture_url: Option<String>,
}

fn header_string(req: &HttpRequest, name: &str) -> Option<String> {
  req
    .headers()
    .get(name)
    .and_then(|value| value.to_str().ok())
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty())
}

impl FromRequest for CurrentUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let resolved = match header_string(req, "X-User-Id") {
      Some(id) => Ok(CurrentUser {
        id,
        name: header_string(req, "X-User-Name").unwrap_or_else(|| "Anonymous".to_string()),
        picture_url: header_string(req, "X-User-Picture"),
      }),
      None => {
        warn!("CurrentUser extractor: Missing or empty X-User-Id header.");
        Err(AppError::Auth("User authentication required. Missing X-User-Id header.".to_string()))
      }
    };
    futures_util::future::ready(resolved)
  }
}

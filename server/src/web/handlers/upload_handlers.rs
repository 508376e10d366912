// owlconnect_server/src/web/handlers/upload_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::serve_upload", skip(app_state, path), fields(stored_name = %path.as_ref()))]
pub async fn serve_upload_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let stored_name = path.into_inner();

  match app_state.uploads.get(&stored_name).await? {
    Some((bytes, content_type)) => Ok(HttpResponse::Ok().content_type(content_type).body(bytes)),
    None => {
      warn!("Upload '{}' not found.", stored_name);
      Err(AppError::NotFound(format!("Upload '{}' not found.", stored_name)))
    }
  }
}

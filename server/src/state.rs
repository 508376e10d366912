// owlconnect_server/src/state.rs
use crate::config::AppConfig;
use crate::services::ObjectStore;
use owlconnect_data::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub data: Database,
  pub uploads: Arc<dyn ObjectStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

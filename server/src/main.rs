// owlconnect_server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use owlconnect_data::Database;
use owlconnect_server::services::LocalObjectStore;
use owlconnect_server::web::configure_app_routes;
use owlconnect_server::{seed, AppConfig, AppState};

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  // (Customize as needed, e.g., with JSON output, OpenTelemetry)
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting OwlConnect application server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Open the embedded database (runs migrations)
  let database = match Database::open(&app_config.database_path).await {
    Ok(db) => {
      tracing::info!("Successfully opened the database.");
      db
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to open the database.");
      panic!("Database error: {}", e);
    }
  };

  // Prepare the uploads directory
  let uploads = match LocalObjectStore::init(&app_config.uploads_dir, &app_config.app_base_url).await {
    Ok(store) => Arc::new(store),
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialize the uploads store.");
      panic!("Uploads error: {}", e);
    }
  };

  // Seed demo data if configured
  if app_config.seed_db {
    if let Err(e) = seed::seed_demo_data(&database).await {
      tracing::error!(error = %e, "Failed to seed demo data.");
    }
  }

  // Create AppState
  let app_state = AppState {
    data: database,
    uploads,
    config: app_config.clone(), // Clone Arc for AppState
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}

// owlconnect_server/src/lib.rs

// Declare modules for the application.
// The binary in main.rs and the integration tests both build on this library crate.
pub mod config;
pub mod errors;
pub mod seed;
pub mod services;
pub mod state;
pub mod web;

// Re-export the pieces main.rs wires together.
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;

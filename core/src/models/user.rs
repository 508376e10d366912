// owlconnect_data/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A mirrored session user. Rows exist so authored content can join to a
/// display name and picture; the session context itself lives outside the
/// database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
  pub id: String,
  pub name: String,
  pub picture_url: Option<String>,
  pub created_at: DateTime<Utc>,
}

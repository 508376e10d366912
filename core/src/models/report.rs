// owlconnect_data/src/models/report.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct NewReport {
  pub post_id: String,
  pub reporter_id: String,
  pub reason: Option<String>,
}

/// A moderation-queue entry filed against a post.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Report {
  pub id: String,
  pub post_id: String,
  pub reporter_id: String,
  pub reason: Option<String>,
  pub created_at: DateTime<Utc>,
}

// owlconnect_data/src/store/reports.rs

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{DataError, DataResult};
use crate::models::{NewReport, Report};

const REPORT_COLUMNS: &str = "SELECT id, post_id, reporter_id, reason, created_at FROM reports";

#[derive(Clone)]
pub struct ReportStore {
  pool: SqlitePool,
}

impl ReportStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Files a moderation-queue entry against a post.
  #[instrument(
    name = "reports::create",
    skip(self, new_report),
    fields(post_id = %new_report.post_id, reporter_id = %new_report.reporter_id)
  )]
  pub async fn create(&self, new_report: NewReport) -> DataResult<Report> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
      "INSERT INTO reports (id, post_id, reporter_id, reason, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&id)
    .bind(&new_report.post_id)
    .bind(&new_report.reporter_id)
    .bind(&new_report.reason)
    .bind(Utc::now())
    .execute(&self.pool)
    .await?;

    let sql = format!("{REPORT_COLUMNS} WHERE id = ?1");
    sqlx::query_as(&sql)
      .bind(&id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or(DataError::NotFound { entity: "report", id })
  }

  /// Moderation view of everything filed against one post, oldest first.
  #[instrument(name = "reports::for_post", skip(self))]
  pub async fn for_post(&self, post_id: &str) -> DataResult<Vec<Report>> {
    let sql = format!("{REPORT_COLUMNS} WHERE post_id = ?1 ORDER BY created_at ASC");
    let reports = sqlx::query_as(&sql).bind(post_id).fetch_all(&self.pool).await?;
    Ok(reports)
  }
}

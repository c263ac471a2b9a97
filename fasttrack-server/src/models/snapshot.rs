//! Per-creator snapshot row

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One creator's snapshot for the resolved reporting window (or their
/// single latest row, depending on the deployment mode).
///
/// `creator_handle` and `manager` are pass-through dimensions from the
/// ingestion side and may be missing on older rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CreatorSnapshot {
    pub creator_id: String,
    pub creator_handle: Option<String>,
    pub manager: Option<String>,
    pub live_days_mtd: i64,
    pub live_streams_mtd: i64,
    pub live_duration_raw: f64,
    pub diamonds_mtd: i64,
    /// Latest data period contributing to the row, `YYYY-MM-DD`.
    pub data_period: NaiveDate,
}

//! Snapshot repository
//!
//! Reads the month-to-date (or latest-row) creator snapshot from
//! `fasttrack_daily`. The table is owned by the ingestion side; this
//! repository only ever selects from it.

use chrono::NaiveDate;
use sqlx::PgPool;

use fasttrack_core::{ReportingWindow, SnapshotMode};

use crate::models::CreatorSnapshot;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Latest data period the feed has delivered, ignoring demo rows.
/// NULL when the table is empty (or holds only demo rows).
const LATEST_PERIOD_SQL: &str = r#"
    SELECT max(data_period)
    FROM fasttrack_daily
    WHERE is_demo_data IS NOT TRUE
"#;

/// Month-to-date rollup per creator across the resolved window.
///
/// A valid live day is a day with at least one hour of live time.
/// Sums are cast so the wire types stay bigint/double precision
/// regardless of the column types the ingestion side settles on.
const MONTH_TO_DATE_SQL: &str = r#"
    SELECT
        f.creator_id,
        f.creator_handle,
        f.manager,
        count(*) FILTER (WHERE coalesce(f.live_duration, 0) >= 1) AS live_days_mtd,
        coalesce(sum(f.live_streams), 0)::bigint                  AS live_streams_mtd,
        coalesce(sum(f.live_duration), 0)::double precision       AS live_duration_raw,
        coalesce(sum(f.diamonds), 0)::bigint                      AS diamonds_mtd,
        max(f.data_period)                                        AS data_period
    FROM fasttrack_daily f
    WHERE f.is_demo_data IS NOT TRUE
      AND f.data_period BETWEEN $1 AND $2
    GROUP BY f.creator_id, f.creator_handle, f.manager
    ORDER BY f.creator_id
"#;

/// Month-to-date rollup restricted to creators still active at the
/// window end: their latest non-demo data period (over the whole
/// table, not just the window) must equal `month_end`.
const MONTH_TO_DATE_ACTIVE_SQL: &str = r#"
    SELECT
        f.creator_id,
        f.creator_handle,
        f.manager,
        count(*) FILTER (WHERE coalesce(f.live_duration, 0) >= 1) AS live_days_mtd,
        coalesce(sum(f.live_streams), 0)::bigint                  AS live_streams_mtd,
        coalesce(sum(f.live_duration), 0)::double precision       AS live_duration_raw,
        coalesce(sum(f.diamonds), 0)::bigint                      AS diamonds_mtd,
        max(f.data_period)                                        AS data_period
    FROM fasttrack_daily f
    WHERE f.is_demo_data IS NOT TRUE
      AND f.data_period BETWEEN $1 AND $2
      AND f.creator_id IN (
          SELECT creator_id
          FROM fasttrack_daily
          WHERE is_demo_data IS NOT TRUE
          GROUP BY creator_id
          HAVING max(data_period) = $2
      )
    GROUP BY f.creator_id, f.creator_handle, f.manager
    ORDER BY f.creator_id
"#;

/// Single most recent row per creator, ties on data period broken by
/// ingestion timestamp. The daily values are surfaced under the same
/// response columns the rollup uses.
const LATEST_ROW_SQL: &str = r#"
    SELECT DISTINCT ON (f.creator_id)
        f.creator_id,
        f.creator_handle,
        f.manager,
        (CASE WHEN coalesce(f.live_duration, 0) >= 1 THEN 1 ELSE 0 END)::bigint
                                                            AS live_days_mtd,
        coalesce(f.live_streams, 0)::bigint                 AS live_streams_mtd,
        coalesce(f.live_duration, 0)::double precision      AS live_duration_raw,
        coalesce(f.diamonds, 0)::bigint                     AS diamonds_mtd,
        f.data_period
    FROM fasttrack_daily f
    WHERE f.is_demo_data IS NOT TRUE
    ORDER BY f.creator_id, f.data_period DESC, f."_ingested_at" DESC
"#;

/// Snapshot repository
pub struct SnapshotRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SnapshotRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the snapshot rows for the configured mode.
    pub async fn fetch(&self, mode: SnapshotMode) -> Result<Vec<CreatorSnapshot>, DbError> {
        match mode {
            SnapshotMode::MonthToDate => self.month_to_date(MONTH_TO_DATE_SQL).await,
            SnapshotMode::MonthToDateActive => self.month_to_date(MONTH_TO_DATE_ACTIVE_SQL).await,
            SnapshotMode::Latest => self.latest_rows().await,
        }
    }

    /// Resolve the reporting window from the latest observed data
    /// period, then aggregate within it.
    ///
    /// Both statements run on one pooled connection; the checkout is
    /// released when `conn` drops, on every exit path.
    async fn month_to_date(&self, sql: &str) -> Result<Vec<CreatorSnapshot>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let latest: Option<NaiveDate> = sqlx::query_scalar(LATEST_PERIOD_SQL)
            .fetch_one(&mut *conn)
            .await?;

        // No non-demo rows: no window to resolve, report nothing.
        let Some(latest) = latest else {
            return Ok(Vec::new());
        };

        let window = ReportingWindow::resolve(latest);
        let rows = sqlx::query_as::<_, CreatorSnapshot>(sql)
            .bind(window.month_start)
            .bind(window.month_end)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows)
    }

    async fn latest_rows(&self) -> Result<Vec<CreatorSnapshot>, DbError> {
        let rows = sqlx::query_as::<_, CreatorSnapshot>(LATEST_ROW_SQL)
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }
}

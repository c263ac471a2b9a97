//! Reporting-window resolution
//!
//! The snapshot covers one calendar month, anchored on the latest data
//! period the feed has delivered. A latest date on the 1st means the
//! feed has just rolled over and carries no current-month data yet, so
//! the previous complete month is reported instead.

use chrono::{Datelike, NaiveDate};

/// Inclusive date range a month-to-date snapshot aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
}

impl ReportingWindow {
    /// Resolve the window from the latest observed data period.
    ///
    /// If `latest` is the first day of its month, the window is the
    /// previous full calendar month. Otherwise it runs from the first
    /// of the current month through `latest` (a partial, in-progress
    /// month).
    pub fn resolve(latest: NaiveDate) -> Self {
        if latest.day() == 1 {
            // Feed rolled over: the day before is the last day of the
            // previous month.
            let month_end = latest.pred_opt().expect("date has a predecessor");
            let month_start = month_end.with_day(1).expect("day 1 exists in every month");
            Self {
                month_start,
                month_end,
            }
        } else {
            let month_start = latest.with_day(1).expect("day 1 exists in every month");
            Self {
                month_start,
                month_end: latest,
            }
        }
    }
}

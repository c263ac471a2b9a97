//! Snapshot mode selection
//!
//! The bridge has shipped with three materially different snapshot
//! semantics over its lifetime. They are mutually exclusive deployment
//! modes, chosen once at startup; a single deployment never blends them.

use std::fmt;
use std::str::FromStr;

use crate::error::BridgeError;

/// How `/fasttrack/snapshot` computes its per-creator rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotMode {
    /// Month-to-date rollup: sum daily metrics per creator across the
    /// resolved reporting window.
    #[default]
    MonthToDate,

    /// Month-to-date rollup restricted to creators whose own latest
    /// data period equals the window end. Creators that went stale
    /// mid-window are dropped even though they have in-window rows.
    MonthToDateActive,

    /// Point-in-time snapshot: the single most recent row per creator,
    /// ties broken by ingestion timestamp. No windowing.
    Latest,
}

impl SnapshotMode {
    /// Canonical CLI/env spelling of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MonthToDate => "month-to-date",
            Self::MonthToDateActive => "month-to-date-active",
            Self::Latest => "latest",
        }
    }
}

impl fmt::Display for SnapshotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapshotMode {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month-to-date" | "mtd" => Ok(Self::MonthToDate),
            "month-to-date-active" | "mtd-active" => Ok(Self::MonthToDateActive),
            "latest" => Ok(Self::Latest),
            other => Err(BridgeError::unknown_mode(other)),
        }
    }
}

//! fasttrack-core: domain logic for the FastTrack snapshot bridge
//!
//! Holds the pieces of the snapshot computation that do not touch the
//! database or the HTTP layer:
//! - Reporting-window resolution (which month a snapshot covers)
//! - Snapshot mode selection (month-to-date, active-only, latest-row)
//! - Structured error types

pub mod error;
pub mod mode;
pub mod window;

pub use error::{BridgeError, Result};
pub use mode::SnapshotMode;
pub use window::ReportingWindow;

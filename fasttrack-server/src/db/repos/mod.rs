//! Repository implementations for database access
//!
//! One repository: the snapshot query over `fasttrack_daily`. All
//! statements carry the demo-data guard; synthetic rows never reach a
//! report.

pub mod snapshot;

pub use snapshot::{DbError, SnapshotRepo};

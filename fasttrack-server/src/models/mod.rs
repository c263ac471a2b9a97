//! Response models
//!
//! Rows come out of the snapshot query already shaped for the wire, so
//! the database row type and the JSON response type are one struct.

pub mod snapshot;

pub use snapshot::CreatorSnapshot;

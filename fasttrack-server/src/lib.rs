//! fasttrack-server: HTTP bridge over the `fasttrack_daily` metrics table
//!
//! Exposes a single read endpoint that runs one analytical query against
//! PostgreSQL and returns the per-creator snapshot rows as JSON, plus a
//! liveness probe.

pub mod db;
pub mod http;
pub mod models;

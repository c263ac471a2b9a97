//! Database layer - connection pool and the snapshot repository
//!
//! # Design Principles
//!
//! - Bounded connection pool - no Arc<Mutex<Connection>>
//! - The table is an external collaborator: read-only access, no
//!   migrations, no writes
//! - One pooled connection checkout per request, released on every
//!   exit path by the connection's drop guard

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;

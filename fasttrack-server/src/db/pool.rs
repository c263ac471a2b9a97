//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. TLS is forced to
//! `Require`: the channel is encrypted but the server certificate is
//! not verified, which is what the managed Postgres this bridge reads
//! from hands out.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low; the bridge serves a single reporting dashboard.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns an error if the URL does not parse or the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.ssl_mode(PgSslMode::Require);
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

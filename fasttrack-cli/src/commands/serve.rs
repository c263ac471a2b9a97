//! HTTP server command for the fasttrack snapshot bridge

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use fasttrack_core::SnapshotMode;
use fasttrack_server::db::create_pool_with_options;
use fasttrack_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Port override (takes precedence over the port in --bind)
    #[arg(long, short = 'p', env = "PORT")]
    pub port: Option<u16>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Snapshot semantics: month-to-date, month-to-date-active, or latest
    #[arg(long, env = "SNAPSHOT_MODE", default_value = "month-to-date")]
    pub mode: SnapshotMode,

    /// Maximum database connections in the pool
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    let mut bind = args.bind;
    if let Some(port) = args.port {
        bind.set_port(port);
    }

    tracing::info!(mode = %args.mode, "Starting fasttrack bridge on {}", bind);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: bind,
        cors_permissive: args.cors_permissive,
        mode: args.mode,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

//! fasttrack CLI - HTTP bridge for FastTrack daily creator metrics
//!
//! This is the entry point for the fasttrack binary, which provides:
//! - The HTTP snapshot bridge (`serve` subcommand)
//! - Configuration validation without starting the server (`check-config`)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "fasttrack",
    author,
    version,
    about = "HTTP bridge exposing per-creator snapshot queries over the FastTrack daily metrics table"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP snapshot bridge
    Serve(commands::serve::ServeArgs),
    /// Validate configuration (database URL, snapshot mode) without connecting
    CheckConfig(commands::check_config::CheckConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A .env next to the binary is a convenience for local runs;
    // deployed environments set real variables.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::CheckConfig(args) => commands::check_config::run(args),
    }
}

//! exlog CLI - exercise tracking API server
//!
//! Entry point for the `exlog` binary:
//! - `serve`: run the HTTP API backed by PostgreSQL or an in-memory store
//! - `migrate`: create or update the PostgreSQL schema

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "exlog",
    author,
    version,
    about = "Exercise tracker REST API",
    long_about = "Create users, log exercises against them, and query a date-filtered, \
                  optionally limited exercise log over HTTP."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Run database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}

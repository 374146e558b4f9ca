//! HTTP server command
//!
//! Builds the store client chosen on the command line and runs the API
//! server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use exlog_server::db::{create_pool_with_options, migrations, PgStore, DEFAULT_MAX_CONNECTIONS};
use exlog_server::{run_server, MemoryStore, ServerConfig, Store};

use super::require_database_url;

/// Storage backend
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// PostgreSQL (requires a database URL)
    Postgres,
    /// In-process memory; data is lost on exit
    Memory,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "EXLOG_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Storage backend
    #[arg(long, value_enum, env = "EXLOG_STORE", default_value = "postgres")]
    pub store: StoreKind,

    /// Database URL (postgres store only)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn Store> = match args.store {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
        StoreKind::Postgres => {
            let database_url = require_database_url(args.database_url)?;

            let pool = create_pool_with_options(&database_url, args.max_connections)
                .await
                .context("Failed to create database pool")?;

            migrations::run(&pool)
                .await
                .context("Failed to run database migrations")?;

            Arc::new(PgStore::new(pool))
        }
    };

    tracing::info!(store = ?args.store, "Starting exlog server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

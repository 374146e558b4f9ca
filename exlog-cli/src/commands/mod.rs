//! Command implementations for the exlog CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag/env value, with a useful error when absent.
pub(crate) fn require_database_url(database_url: Option<String>) -> Result<String> {
    database_url
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, the DATABASE_URL env, or a .env file")
}

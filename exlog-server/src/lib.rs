//! exlog-server: exercise tracking HTTP API
//!
//! Create users, log exercises against them, and read back a
//! date-filtered, optionally limited exercise log.
//!
//! Persistence goes through the [`store::Store`] trait, with a PostgreSQL
//! backend in [`db`] and an in-process backend in [`store::memory`].

pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod store;

pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
pub use store::{MemoryStore, Store, StoreError};

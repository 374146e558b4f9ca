//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, ServerConfig, ServerError};
pub use error::ApiError;

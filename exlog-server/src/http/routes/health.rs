//! Health check endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

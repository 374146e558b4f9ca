//! Route handlers organized by resource

pub mod health;
pub mod users;
pub mod exercises;
pub mod logs;

use axum::Router;

use crate::AppState;

/// All API routes, not yet bound to state
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(exercises::router())
        .merge(logs::router())
}

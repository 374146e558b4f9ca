//! Exercise log endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::UserIdPath;
use crate::models::{ExerciseDate, ExerciseDuration, LogFilter, LogParams};
use crate::store::Exercise;
use crate::AppState;

/// One entry in a user's log
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: ExerciseDuration,
    pub date: ExerciseDate,
}

impl From<Exercise> for LogEntry {
    fn from(e: Exercise) -> Self {
        Self {
            description: e.description,
            duration: e.duration,
            date: e.date,
        }
    }
}

/// Log response; `count` is the number of entries actually returned
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// GET /api/users/{id}/logs?from&to&limit
async fn get_log(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    query: Result<Query<LogParams>, QueryRejection>,
) -> Result<Json<LogResponse>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest {
        message: e.body_text(),
    })?;
    let filter = LogFilter::try_from(params)?;

    let user = state.store().get_user(user_id).await?;
    let exercises = state.store().find_exercises(user.id, &filter).await?;

    tracing::debug!(user_id = %user.id, count = exercises.len(), ?filter, "log fetched");

    let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
    Ok(Json(LogResponse {
        username: user.username,
        count: log.len(),
        log,
    }))
}

/// Log routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/users/{id}/logs", get(get_log))
}

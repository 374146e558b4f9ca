//! Exercise creation endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonOrForm, UserIdPath};
use crate::models::{Description, DurationInput, ExerciseDate, ExerciseDuration};
use crate::store::NewExercise;
use crate::AppState;

/// Create exercise request
///
/// `date` is optional; blank or absent means today.
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<DurationInput>,
    pub date: Option<String>,
}

/// Exercise response, echoing the owner's username
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: ExerciseDuration,
    pub date: ExerciseDate,
}

/// POST /api/users/{id}/exercises - log an exercise for an existing user
async fn create_exercise(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    JsonOrForm(req): JsonOrForm<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    // The store has no referential integrity of its own; check before writing.
    // An unknown user is reported ahead of any field errors.
    let user = state.store().get_user(user_id).await?;

    let description = Description::new(req.description.as_deref())?;
    let duration = ExerciseDuration::new(req.duration)?;
    let date = match req.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => ExerciseDate::parse("date", s)?,
        None => ExerciseDate::today(),
    };

    let exercise = state
        .store()
        .create_exercise(NewExercise {
            user_id: user.id,
            description,
            duration,
            date,
        })
        .await?;

    tracing::info!(
        user_id = %user.id,
        duration = exercise.duration.minutes(),
        date = %exercise.date,
        "exercise logged"
    );

    Ok(Json(ExerciseResponse {
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: exercise.date,
    }))
}

/// Exercise routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/users/{id}/exercises", post(create_exercise))
}

//! User endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonOrForm;
use crate::models::Username;
use crate::store::User;
use crate::AppState;

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
        }
    }
}

/// POST /api/users - create a user (duplicate usernames allowed)
async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let username = Username::new(req.username.as_deref())?;
    let user = state.store().create_user(&username).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "user created");
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users - list every user
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.store().list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

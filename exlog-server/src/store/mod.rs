//! Persistence boundary
//!
//! Handlers only ever talk to a [`Store`]. The process entry point decides
//! which backend to construct and hands it to the router through
//! [`AppState`](crate::AppState).

pub mod memory;

use async_trait::async_trait;

use crate::models::{Description, ExerciseDate, ExerciseDuration, LogFilter, UserId, Username};

pub use memory::MemoryStore;

/// Stored user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

/// Stored exercise. Exercises have no client-visible identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub user_id: UserId,
    pub description: String,
    pub duration: ExerciseDuration,
    pub date: ExerciseDate,
}

/// Validated exercise ready to be written
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: UserId,
    pub description: Description,
    pub duration: ExerciseDuration,
    pub date: ExerciseDate,
}

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl StoreError {
    pub(crate) fn user_not_found(id: UserId) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }
}

/// Document-style store over two collections: users and exercises.
#[async_trait]
pub trait Store: Send + Sync {
    /// Create a user. Usernames need not be unique.
    async fn create_user(&self, username: &Username) -> Result<User, StoreError>;

    /// All users, in storage order.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Look up one user, failing with [`StoreError::NotFound`] if absent.
    async fn get_user(&self, id: UserId) -> Result<User, StoreError>;

    /// Append an exercise. Fails with [`StoreError::NotFound`] if the owner doesn't exist.
    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError>;

    /// Exercises of one user in insertion order, restricted to the filter's
    /// date range and truncated to its limit.
    async fn find_exercises(
        &self,
        user_id: UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, StoreError>;

    /// Cheap liveness probe for the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}

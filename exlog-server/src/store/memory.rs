//! In-process store
//!
//! Keeps everything in insertion-ordered vectors behind tokio locks. Used by
//! the test suite and by `exlog serve --store memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Exercise, NewExercise, Store, StoreError, User};
use crate::models::{LogFilter, UserId, Username};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    exercises: RwLock<Vec<Exercise>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, username: &Username) -> Result<User, StoreError> {
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            username: username.as_str().to_owned(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user(&self, id: UserId) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::user_not_found(id))
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        // Same guarantee the foreign key gives the Postgres backend
        self.get_user(exercise.user_id).await?;

        let stored = Exercise {
            user_id: exercise.user_id,
            description: exercise.description.into_string(),
            duration: exercise.duration,
            date: exercise.date,
        };
        self.exercises.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_exercises(
        &self,
        user_id: UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, StoreError> {
        let exercises = self.exercises.read().await;
        let matching = exercises
            .iter()
            .filter(|e| e.user_id == user_id && filter.contains(e.date))
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

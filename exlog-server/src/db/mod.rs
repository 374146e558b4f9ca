//! Database layer - connection pool, migrations, and repositories
//!
//! [`PgStore`] adapts the per-table repositories to the [`Store`] trait.

pub mod migrations;
pub mod repos;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::models::{LogFilter, UserId, Username};
use crate::store::{Exercise, NewExercise, Store, StoreError, User};

pub use repos::{ExerciseRepo, UserRepo};

/// Default pool size when the CLI doesn't override it.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect a pool with [`DEFAULT_MAX_CONNECTIONS`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect a pool with an explicit connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect(database_url)
        .await
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, username: &Username) -> Result<User, StoreError> {
        UserRepo::new(&self.pool).create(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        UserRepo::new(&self.pool).list().await
    }

    async fn get_user(&self, id: UserId) -> Result<User, StoreError> {
        UserRepo::new(&self.pool).get(id).await
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        ExerciseRepo::new(&self.pool).create(exercise).await
    }

    async fn find_exercises(
        &self,
        user_id: UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, StoreError> {
        ExerciseRepo::new(&self.pool).find(user_id, filter).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

//! User repository

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{UserId, Username};
use crate::store::{StoreError, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user; the database assigns the id.
    pub async fn create(&self, username: &Username) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO exlog_users (username) VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(username.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(user_from_row(&row))
    }

    /// List every user, oldest first.
    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username
            FROM exlog_users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Get a single user by id.
    pub async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let row = sqlx::query("SELECT id, username FROM exlog_users WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StoreError::user_not_found(id))?;

        Ok(user_from_row(&row))
    }
}

fn user_from_row(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: UserId::from(row.get::<Uuid, _>("id")),
        username: row.get("username"),
    }
}

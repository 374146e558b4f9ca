//! Exercise repository
//!
//! Date-range and limit filtering run in SQL; `ORDER BY id` keeps the
//! result in insertion order so `LIMIT` takes the earliest-stored entries.

use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{ExerciseDate, ExerciseDuration, LogFilter, UserId};
use crate::store::{Exercise, NewExercise, StoreError};

/// Exercise repository
pub struct ExerciseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ExerciseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an exercise.
    ///
    /// The foreign key on `user_id` turns a vanished owner into `NotFound`.
    pub async fn create(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        let user_id = exercise.user_id;
        let row = sqlx::query(
            r#"
            INSERT INTO exlog_exercises (user_id, description, duration, performed_on)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, description, duration, performed_on
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(exercise.description.as_str())
        .bind(exercise.duration.minutes())
        .bind(exercise.date.as_naive())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::user_not_found(user_id)
            }
            other => StoreError::Database(other),
        })?;

        exercise_from_row(&row)
    }

    /// Exercises for one user, filtered and limited.
    pub async fn find(&self, user_id: UserId, filter: &LogFilter) -> Result<Vec<Exercise>, StoreError> {
        // LIMIT NULL means no limit
        let limit = filter.limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX));

        let rows = sqlx::query(
            r#"
            SELECT user_id, description, duration, performed_on
            FROM exlog_exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR performed_on >= $2)
              AND ($3::date IS NULL OR performed_on <= $3)
            ORDER BY id
            LIMIT $4
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(filter.from.map(|d| d.as_naive()))
        .bind(filter.to.map(|d| d.as_naive()))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(exercise_from_row).collect()
    }
}

fn exercise_from_row(row: &sqlx::postgres::PgRow) -> Result<Exercise, StoreError> {
    let minutes: i32 = row.get("duration");
    let duration = ExerciseDuration::from_minutes(i64::from(minutes))
        .map_err(|e| StoreError::Database(sqlx::Error::Decode(Box::new(e))))?;

    Ok(Exercise {
        user_id: UserId::from(row.get::<Uuid, _>("user_id")),
        description: row.get("description"),
        duration,
        date: ExerciseDate::from(row.get::<NaiveDate, _>("performed_on")),
    })
}

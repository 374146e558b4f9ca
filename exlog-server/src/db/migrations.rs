//! Schema migrations for the exercise tracker tables
//!
//! Every statement is idempotent, so running on each startup is safe.

use sqlx::PgPool;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running exlog migrations...");

    // gen_random_uuid() is built in from PostgreSQL 13
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS exlog_users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // BIGSERIAL id doubles as the stored order of a user's log
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS exlog_exercises (
            id BIGSERIAL PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES exlog_users(id) ON DELETE CASCADE,
            description TEXT NOT NULL,
            duration INTEGER NOT NULL CHECK (duration > 0),
            performed_on DATE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_exlog_exercises_user
            ON exlog_exercises(user_id, id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("exlog migrations complete");
    Ok(())
}

//! Embedded schema migration

use sqlx::postgres::PgPool;
use tracing::info;

/// Schema applied at startup; every statement is idempotent
pub const SCHEMA: &str = include_str!("../../migrations/0001_init.sql");

/// Apply the embedded schema inside a single transaction
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    // Serialize concurrent startups
    sqlx::query("SELECT pg_advisory_xact_lock(7370616)")
        .execute(&mut *tx)
        .await?;
    sqlx::raw_sql(SCHEMA).execute(&mut *tx).await?;
    tx.commit().await?;

    info!("Database schema is up to date");
    Ok(())
}

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    config::DatabaseConfig,
    error::{AppError, Result},
};

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    let migrator = sqlx::migrate!();
    tracing::info!(
        "Applying {} products schema migration(s)",
        migrator.migrations.len()
    );
    migrator
        .run(&pool)
        .await
        .map_err(|e| AppError::DatabaseError(sqlx::Error::Migrate(Box::new(e))))?;

    tracing::info!(
        "Database connection established with {} max connections",
        config.max_connections
    );

    Ok(pool)
}

pub async fn check_health(pool: &PgPool) -> sqlx::Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

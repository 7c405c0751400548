use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the connection pool for the enrollment database.
///
/// The pool is created here once and handed to the router as part of the
/// application state; handlers never reach for a global.
pub async fn connect() -> Result<PgPool, StorageError> {
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| StorageError::ConfigMissing("DATABASE_URL"))?;

    let db_config = &crate::config::config().database;
    let pool = PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.connection_timeout))
        .connect(&url)
        .await?;

    info!("Created database pool");
    Ok(pool)
}

/// Pings the database to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the database layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Duplicate value violates unique constraint: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Builds the shared connection pool once at startup
pub struct DatabaseManager;

impl DatabaseManager {
    /// Create the bounded pool described by `config`.
    ///
    /// Connections are opened on first use, so the service can start (and
    /// answer liveness checks) before the database is reachable.
    pub fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        if config.url.trim().is_empty() {
            return Err(DatabaseError::ConfigMissing("DATABASE_URL"));
        }

        let display_url = Self::redacted_url(&config.url)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .idle_timeout(config.idle_timeout())
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy(&config.url)?;

        info!(
            "Created database pool for {} (max {}, min {}, idle timeout {}s)",
            display_url, config.max_connections, config.min_connections, config.idle_timeout_secs
        );
        Ok(pool)
    }

    /// Strip credentials from a connection URL so it can be logged
    pub fn redacted_url(raw: &str) -> Result<String, DatabaseError> {
        let mut url = url::Url::parse(raw).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if url.password().is_some() {
            url.set_password(Some("***"))
                .map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        }
        Ok(url.into())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close the pool on shutdown, waiting for checked-out connections
    pub async fn close(pool: &PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }
}

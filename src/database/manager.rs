use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

const SCHEMA: &str = include_str!("schema.sql");

// Postgres SQLSTATE codes for the constraints the schema relies on
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Errors from the store layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid value: {0}")]
    Invalid(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let mapped = match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => Some(DatabaseError::Conflict("Duplicate record".into())),
                Some(FOREIGN_KEY_VIOLATION) => Some(DatabaseError::InvalidReference(
                    "Referenced record does not exist".into(),
                )),
                Some(CHECK_VIOLATION) => Some(DatabaseError::Invalid("Value out of range".into())),
                _ => None,
            };
            if let Some(mapped) = mapped {
                // Constraint names stay in the log
                debug!("Constraint violation: {}", db_err.message());
                return mapped;
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Connection pool construction and store-wide maintenance
pub struct DatabaseManager;

impl DatabaseManager {
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        info!("Connecting to PostgreSQL...");

        let pool = Self::pool_options(config).connect(url).await?;

        info!("PostgreSQL connection pool established");
        Ok(pool)
    }

    /// Pool that opens connections on first use. Used by tests that never
    /// reach the store.
    pub fn connect_lazy(url: &str, config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        Ok(Self::pool_options(config).connect_lazy(url)?)
    }

    fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
    }

    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Creates the tables if they do not exist yet.
    pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
        pool.execute(SCHEMA).await?;
        info!("Schema applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_every_table() {
        for table in ["companies", "jobs", "users", "technologies", "applications"] {
            assert!(
                SCHEMA.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)),
                "missing table {table}"
            );
        }
    }

    #[test]
    fn non_database_errors_pass_through() {
        let err = DatabaseError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DatabaseError::Sqlx(sqlx::Error::RowNotFound)));
    }
}

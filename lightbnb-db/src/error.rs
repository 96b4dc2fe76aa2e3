//! Error types for lightbnb-db
//!
//! Library callers get structured errors through `thiserror`; the binary
//! wraps them with `anyhow` context.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ValidationError;

/// Failure of a data-access operation
#[derive(Error, Debug)]
pub enum DbError {
    /// The driver rejected or failed the statement (QueryFailure)
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Input rejected before any SQL was sent
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    /// Whether the failure came from the database rather than from input checks.
    pub fn is_query_failure(&self) -> bool {
        matches!(self, DbError::Query(_))
    }
}

/// Result type alias for data-access operations
pub type Result<T> = std::result::Result<T, DbError>;

/// Failure to resolve connection settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err: DbError = ValidationError::Empty { field: "email" }.into();
        assert_eq!(err.to_string(), "invalid input: email cannot be empty");
        assert!(!err.is_query_failure());
    }

    #[test]
    fn driver_error_is_query_failure() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(err.is_query_failure());
        assert!(err.to_string().starts_with("query failed:"));
    }
}

//! Shared `PgPool` construction
//!
//! The CLI goes through `connect`, which takes a resolved `DatabaseConfig`.
//! `create_pool` is the short form for callers that already hold a URL.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Pool size when the config file doesn't set `max_connections`
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool of `DEFAULT_MAX_CONNECTIONS` for `database_url`.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a pool capped at `max_connections`.
///
/// A malformed URL fails before any network access.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Open the pool described by resolved configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        database = %config.redacted_url(),
        max_connections = config.max_connections,
        "Connecting to database"
    );
    create_pool_with_options(&config.url(), config.max_connections).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(url: String, max_connections: u32) -> DatabaseConfig {
        DatabaseConfig {
            url: Some(url),
            max_connections,
            ..DatabaseConfig::default()
        }
    }

    #[tokio::test]
    async fn connect_rejects_malformed_url() {
        let config = config_for("not a postgres url".to_string(), 2);

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Configuration(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_sizes_pool_from_config() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect(&config_for(url, 2)).await.expect("connect failed");

        assert_eq!(pool.options().get_max_connections(), 2);

        let database: String = sqlx::query_scalar("SELECT current_database()")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert!(!database.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_queues_beyond_pool_size() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect(&config_for(url, 1)).await.expect("connect failed");

        let (a, b) = tokio::join!(
            sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&pool),
            sqlx::query_scalar::<_, i32>("SELECT 2").fetch_one(&pool),
        );
        assert_eq!((a.unwrap(), b.unwrap()), (1, 2));
        assert!(pool.size() <= 1);
    }
}

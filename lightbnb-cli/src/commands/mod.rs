//! Command implementations for the lightbnb CLI

pub mod migrate;
pub mod properties;
pub mod reservations;
pub mod user;

pub use migrate::run_migrate;
pub use properties::run_properties;
pub use reservations::run_reservations;
pub use user::run_user;

use anyhow::{Context, Result};
use lightbnb_db::config::load_dotenv;
use lightbnb_db::DatabaseConfig;
use serde::Serialize;
use sqlx::PgPool;

/// Connection options shared by every database command
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub database_url: Option<String>,
}

impl ConnectOptions {
    /// Load .env files, resolve settings and open the shared pool.
    pub async fn open_pool(&self) -> Result<PgPool> {
        load_dotenv();
        let config = DatabaseConfig::resolve(self.database_url.clone())
            .context("Failed to resolve database configuration")?;

        lightbnb_db::db::connect(&config)
            .await
            .with_context(|| format!("Failed to connect to {}", config.redacted_url()))
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

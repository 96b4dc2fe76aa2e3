//! Connection settings
//!
//! Sources, highest priority first: `--database-url`, `DATABASE_URL` (also
//! read from `.env` files), `~/.lightbnb/config.toml`, built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.lightbnb/.env
pub fn load_dotenv() {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path.display().to_string());
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            // dotenvy doesn't overwrite existing vars
            match dotenvy::from_path(&env_file) {
                Ok(()) => loaded_from.push(env_file.display().to_string()),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.lightbnb)");
    } else {
        info!("Loaded environment from: {}", loaded_from.join(", "));
    }
}

/// Get the lightbnb config directory path (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}

/// Default config file path (~/.lightbnb/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightbnbConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Connection settings for the shared pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Full connection string; wins over the individual fields when set
    #[serde(default)]
    pub url: Option<String>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "labber".to_string()
}

fn default_password() -> String {
    "labber".to_string()
}

fn default_database() -> String {
    "lightbnb".to_string()
}

fn default_max_connections() -> u32 {
    crate::db::pool::DEFAULT_MAX_CONNECTIONS
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: default_password(),
            database: default_database(),
            max_connections: default_max_connections(),
            url: None,
        }
    }
}

impl DatabaseConfig {
    /// Connection URL for sqlx.
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.database
            ),
        }
    }

    /// Same as `url` with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        match &self.url {
            Some(_) => "<DATABASE_URL>".to_string(),
            None => format!(
                "postgres://{}:***@{}:{}/{}",
                self.user, self.host, self.port, self.database
            ),
        }
    }

    /// Resolve settings: explicit URL, then `DATABASE_URL`, then the config file, then defaults.
    pub fn resolve(explicit_url: Option<String>) -> Result<Self, ConfigError> {
        let url = explicit_url.or_else(|| std::env::var("DATABASE_URL").ok());
        Self::resolve_from(url, default_config_path().as_deref())
    }

    /// Resolve against a given config file instead of the home directory.
    ///
    /// A missing file means defaults; `url` overrides whatever the file says.
    pub fn resolve_from(url: Option<String>, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) if path.exists() => LightbnbConfig::load_from(path)?.database,
            _ => Self::default(),
        };

        if let Some(url) = url {
            config.url = Some(url);
        }

        debug!("Resolved database: {}", config.redacted_url());
        Ok(config)
    }
}

impl LightbnbConfig {
    /// Parse a TOML config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MYSQL_HOST, DEFAULT_MYSQL_PORT, DEFAULT_MYSQL_USER,
    DEFAULT_SETUP_SCRIPT,
};

/// Global client configuration (lazily initialized)
pub static CONFIG: LazyLock<Result<Config, ConfigError>> = LazyLock::new(Config::from_env);

/// Main client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all page routes are resolved against
    pub base_url: String,
}

/// MySQL bootstrap configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// SQL script executed by `db-setup`
    pub script_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            client: ClientConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            log: LogConfig::from_env()?,
        })
    }
}

impl ClientConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var("LITECODE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("LITECODE_BASE_URL".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("MYSQL_HOST").unwrap_or_else(|_| DEFAULT_MYSQL_HOST.to_string()),
            port: env::var("MYSQL_PORT")
                .unwrap_or_else(|_| DEFAULT_MYSQL_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MYSQL_PORT".to_string()))?,
            user: env::var("MYSQL_USER").unwrap_or_else(|_| DEFAULT_MYSQL_USER.to_string()),
            password: env::var("MYSQL_PASSWORD").unwrap_or_default(),
            script_path: PathBuf::from(
                env::var("DB_SETUP_SCRIPT").unwrap_or_else(|_| DEFAULT_SETUP_SCRIPT.to_string()),
            ),
        })
    }
}

impl LogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        };

        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            format,
        })
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let db = DatabaseConfig {
            host: DEFAULT_MYSQL_HOST.to_string(),
            port: DEFAULT_MYSQL_PORT,
            user: DEFAULT_MYSQL_USER.to_string(),
            password: String::new(),
            script_path: PathBuf::from(DEFAULT_SETUP_SCRIPT),
        };
        assert_eq!(db.host, "localhost");
        assert_eq!(db.port, 3306);
        assert_eq!(db.script_path, PathBuf::from("database/init.sql"));

        let log = LogConfig::default();
        assert_eq!(log.format, LogFormat::Pretty);
        assert_eq!(log.rust_log, "info");
    }
}

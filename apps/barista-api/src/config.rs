//! API configuration module.
//!
//! Configuration is loaded from environment variables (and a `.env` file, if
//! present) with fallback to defaults.

use std::env;
use std::net::SocketAddr;

use barista_db::DbConfig;
use serde::{Deserialize, Serialize};

/// Title reported by the root endpoint.
pub const API_TITLE: &str = "Coffee Shop API";

/// Version reported by the root endpoint.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database URL or path
    pub database_url: String,

    /// Maximum pooled SQLite connections
    pub db_max_connections: u32,

    /// CORS origins; `["*"]` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: "sqlite://./barista.db".to_string(),
            db_max_connections: 5,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment, reading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is not an error
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("BARISTA_HOST").unwrap_or(defaults.host),

            port: match lookup("BARISTA_PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("BARISTA_PORT".to_string()))?,
                None => defaults.port,
            },

            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),

            db_max_connections: match lookup("DB_MAX_CONNECTIONS") {
                Some(max) => max
                    .parse::<u32>()
                    .ok()
                    .filter(|max| *max > 0)
                    .ok_or_else(|| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
                None => defaults.db_max_connections,
            },

            allowed_origins: match lookup("ALLOWED_ORIGINS") {
                Some(origins) => parse_origins(&origins),
                None => defaults.allowed_origins,
            },
        };

        if config.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue("ALLOWED_ORIGINS".to_string()));
        }

        Ok(config)
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BARISTA_HOST".to_string()))
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::from_url(&self.database_url).max_connections(self.db_max_connections)
    }

    /// Whether every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

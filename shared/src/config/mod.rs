//! Configuration module with one sub-module per concern
//!
//! - `database` - SQLite key store location and pool settings
//! - `environment` - Environment detection and logging configuration
//! - `keys` - Key generation, seeding and token lifetimes
//! - `server` - HTTP listener configuration

pub mod database;
pub mod environment;
pub mod keys;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use keys::{KeyConfig, SeedPolicy};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Key store configuration
    pub database: DatabaseConfig,

    /// Signing key and token configuration
    pub keys: KeyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            keys: KeyConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            keys: KeyConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Configuration used by tests: in-memory store, ephemeral port
    pub fn in_memory() -> Self {
        Self {
            server: ServerConfig::new("127.0.0.1", 0),
            database: DatabaseConfig::in_memory(),
            ..Default::default()
        }
    }
}

/// Reads `key` from the environment and parses it, falling back to `default`
/// when the variable is unset or does not parse.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

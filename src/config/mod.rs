//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Default listening port
pub const DEFAULT_PORT: u16 = 4000;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host (for generating URLs)
    pub host: Option<String>,

    /// Server port
    pub port: u16,

    /// SQLite URL for the user directory. The `users` query is unavailable when unset.
    pub database_url: Option<String>,

    /// Maximum pooled connections to the user directory
    pub database_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            database_url: None,
            database_max_connections: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").filter(|h| !h.is_empty()),

            port: match lookup("PORT") {
                Some(port) => port.parse().context("Invalid PORT")?,
                None => defaults.port,
            },

            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),

            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(max) => max.parse().context("Invalid DATABASE_MAX_CONNECTIONS")?,
                None => defaults.database_max_connections,
            },
        })
    }

    /// Public base URL used in startup logs
    pub fn base_url(&self) -> String {
        format!(
            "http://{}:{}",
            self.host.as_deref().unwrap_or("localhost"),
            self.port
        )
    }
}

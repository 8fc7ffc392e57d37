//! Application configuration loading and validation.
//!
//! [`Config`] aggregates every section of the TOML file. Each section has
//! defaults, so an empty file is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use storekeep::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::database::DatabaseConfig;
use super::documents::{DocumentBackend, DocumentsConfig};
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `server.port`.
pub const PORT_ENV: &str = "PORT";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
}

impl Config {
    /// Parse and validate configuration from a TOML string.
    ///
    /// Environment overrides are not applied here; see [`Config::load`].
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or a value is invalid.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply `PORT` from the
    /// environment.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, fails to parse, or
    /// contains invalid values (including an unparseable `PORT`).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())?;
        Ok(config)
    }

    /// Replace `server.port` with `value` when present.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if `value` is not a port number.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<()> {
        let Some(raw) = value else {
            return Ok(());
        };
        self.server.port = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: "PORT",
            reason: format!("not a port number: {raw:?}"),
        })?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        self.logging.validate()?;

        if self.database.url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.url",
            }
            .into());
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.documents.backend == DocumentBackend::Mongodb {
            if !cfg!(feature = "mongodb") {
                return Err(ConfigError::InvalidValue {
                    field: "documents.backend",
                    reason: "built without the `mongodb` feature".to_string(),
                }
                .into());
            }
            if self.documents.uri.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "documents.uri",
                }
                .into());
            }
        }
        if self.documents.database.is_empty() {
            return Err(ConfigError::MissingField {
                field: "documents.database",
            }
            .into());
        }
        if self.documents.collection.is_empty() {
            return Err(ConfigError::MissingField {
                field: "documents.collection",
            }
            .into());
        }

        Ok(())
    }

    /// Initialize the global tracing subscriber from `[logging]`.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

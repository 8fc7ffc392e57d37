//! Relational store configuration.

use serde::Deserialize;

/// SQLite database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path (or `:memory:`) of the SQLite database.
    #[serde(default = "default_url")]
    pub url: String,
    /// Fixed connection pool capacity.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_url() -> String {
    "storekeep.db".into()
}

const fn default_max_connections() -> u32 {
    3
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
        }
    }
}

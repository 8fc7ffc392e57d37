//! Document store configuration.

use serde::Deserialize;

/// Which manager directory implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentBackend {
    /// MongoDB collection (requires the `mongodb` feature).
    #[default]
    Mongodb,
    /// Process-local directory; contents are lost on restart.
    Memory,
}

/// Document store settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    #[serde(default)]
    pub backend: DocumentBackend,
    /// Connection string for the MongoDB backend.
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_uri() -> String {
    "mongodb://127.0.0.1:27017".into()
}

fn default_database() -> String {
    "proj2023MongoDB".into()
}

fn default_collection() -> String {
    "managers".into()
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            backend: DocumentBackend::default(),
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

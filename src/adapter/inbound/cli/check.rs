//! `storekeep check` handlers.

use std::path::Path;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::documents::DocumentBackend;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file without starting anything.
///
/// # Errors
/// Returns an error if the file cannot be loaded or is invalid.
pub fn execute_config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Listen", format!("{}:{}", config.server.host, config.server.port));
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);
    output::field("Database", &config.database.url);
    output::field("Pool size", config.database.max_connections);
    match config.documents.backend {
        DocumentBackend::Mongodb => {
            output::field("Documents", "mongodb");
            output::field("MongoDB URI", &config.documents.uri);
        }
        DocumentBackend::Memory => {
            output::field("Documents", "memory");
            output::warning("Managers are not persisted with the memory backend");
        }
    }
    output::field(
        "Collection",
        format!("{}.{}", config.documents.database, config.documents.collection),
    );
    Ok(())
}

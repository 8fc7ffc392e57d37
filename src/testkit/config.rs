//! Canonical test configurations.

use crate::infrastructure::config::documents::DocumentBackend;
use crate::infrastructure::config::settings::Config;

/// Config using an in-memory database and directory on an ephemeral port.
pub fn in_memory() -> Config {
    let mut config = Config::default();
    config.server.port = 0;
    config.database.url = ":memory:".to_string();
    config.documents.backend = DocumentBackend::Memory;
    config
}

/// TOML text equivalent to [`in_memory`].
pub const IN_MEMORY_TOML: &str = r#"
[server]
host = "127.0.0.1"
port = 0

[logging]
level = "warn"

[database]
url = ":memory:"

[documents]
backend = "memory"
"#;

//! Wiring of configuration into concrete adapters.

#[cfg(feature = "mongodb")]
use std::time::Duration;

use tracing::{info, warn};

use crate::adapter::inbound::http;
use crate::adapter::outbound::directory::Directory;
use crate::adapter::outbound::memory::MemoryDirectory;
#[cfg(feature = "mongodb")]
use crate::adapter::outbound::mongo::MongoDirectory;
use crate::adapter::outbound::sqlite::catalog::SqliteCatalog;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::application::DataContext;
#[cfg(not(feature = "mongodb"))]
use crate::error::ConfigError;
use crate::error::Result;
use crate::infrastructure::config::database::DatabaseConfig;
use crate::infrastructure::config::documents::{DocumentBackend, DocumentsConfig};
use crate::infrastructure::config::settings::Config;

/// How long startup waits for MongoDB before carrying on.
#[cfg(feature = "mongodb")]
const STARTUP_PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Data-access context used by the running application.
pub type AppContext = DataContext<SqliteCatalog, Directory>;

/// Open the SQLite pool and apply the embedded schema.
///
/// # Errors
/// Returns an error if the pool cannot be built or migrations fail.
pub fn open_catalog(config: &DatabaseConfig) -> Result<SqliteCatalog> {
    // Every connection to `:memory:` is a separate database.
    let max_size = if config.url == ":memory:" {
        1
    } else {
        config.max_connections
    };
    let pool = create_pool(&config.url, max_size)?;
    run_migrations(&pool)?;
    info!(url = %config.url, max_size, "Catalog database ready");
    Ok(SqliteCatalog::new(pool))
}

/// Build the configured manager directory.
///
/// An unreachable MongoDB server is logged and tolerated; the driver retries
/// on each request.
///
/// # Errors
/// Returns an error if the MongoDB URI is invalid or the backend is not
/// compiled in.
pub async fn open_directory(config: &DocumentsConfig) -> Result<Directory> {
    let directory = match config.backend {
        DocumentBackend::Memory => Directory::Memory(MemoryDirectory::new()),
        #[cfg(feature = "mongodb")]
        DocumentBackend::Mongodb => {
            let mongo =
                MongoDirectory::connect(&config.uri, &config.database, &config.collection).await?;
            if let Err(e) = mongo.ping_within(STARTUP_PING_TIMEOUT).await {
                warn!(error = %e, "MongoDB ping failed, continuing");
            }
            Directory::Mongo(mongo)
        }
        #[cfg(not(feature = "mongodb"))]
        DocumentBackend::Mongodb => {
            return Err(ConfigError::InvalidValue {
                field: "documents.backend",
                reason: "built without the `mongodb` feature".to_string(),
            }
            .into())
        }
    };
    info!(backend = directory.backend_name(), "Manager directory ready");
    Ok(directory)
}

/// Build the full data-access context from configuration.
///
/// # Errors
/// Returns an error if either store cannot be opened.
pub async fn build_context(config: &Config) -> Result<AppContext> {
    let catalog = open_catalog(&config.database)?;
    let directory = open_directory(&config.documents).await?;
    Ok(DataContext::new(catalog, directory))
}

/// Build the context and serve HTTP until Ctrl-C.
///
/// # Errors
/// Returns an error if startup fails or the listener cannot be bound.
pub async fn run_server(config: &Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let ctx = build_context(config).await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    http::serve(listener, ctx, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

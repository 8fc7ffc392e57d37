//! `storekeep serve` handler.

use tracing::info;

use super::command::ServeArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap::run_server;
use crate::infrastructure::config::settings::Config;

/// Serve HTTP until Ctrl-C.
///
/// # Errors
/// Returns an error if startup fails.
pub async fn execute(mut config: Config, args: &ServeArgs) -> Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!(version = env!("CARGO_PKG_VERSION"), "storekeep starting");
    run_server(&config).await?;
    info!("storekeep stopped");
    Ok(())
}

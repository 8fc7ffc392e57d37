//! CLI module graph and dispatch.

pub mod check;
pub mod command;
pub mod output;
pub mod seed;
pub mod serve;

use self::command::{CheckCommand, Cli, Commands};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run the parsed command line.
///
/// # Errors
/// Returns any error from the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => {
            let config = Config::load(&cli.config)?;
            config.init_logging();
            serve::execute(config, &args).await
        }
        Commands::Seed(args) => {
            let config = Config::load(&cli.config)?;
            config.init_logging();
            seed::execute(&config, args.fixtures.as_deref()).await
        }
        Commands::Check(CheckCommand::Config) => check::execute_config(&cli.config),
    }
}

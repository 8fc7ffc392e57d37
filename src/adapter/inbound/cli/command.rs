//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Store, product and manager administration web application
#[derive(Parser, Debug)]
#[command(name = "storekeep")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the web application until Ctrl-C
    Serve(ServeArgs),

    /// Load fixture data into both stores
    Seed(SeedArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (overrides config file and PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// JSON fixture file (defaults to the built-in sample set)
    #[arg(long)]
    pub fixtures: Option<PathBuf>,
}

/// Subcommands for `storekeep check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and print a summary
    Config,
}

//! `storekeep seed` handler.

use std::path::Path;

use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::{open_catalog, open_directory};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::seed::{seed, Fixtures};

/// Load fixtures into the configured stores.
///
/// # Errors
/// Returns an error if the fixtures cannot be read or either store rejects
/// a write.
pub async fn execute(config: &Config, fixtures: Option<&Path>) -> Result<()> {
    let fixtures = match fixtures {
        Some(path) => Fixtures::load(path)?,
        None => Fixtures::sample()?,
    };

    let catalog = open_catalog(&config.database)?;
    let directory = open_directory(&config.documents).await?;
    let report = seed(&catalog, &directory, &fixtures).await?;

    output::section("Seed");
    output::field("Stores", report.stores);
    output::field("Products", report.products);
    output::field("Pricing", report.pricing);
    output::field("Managers", report.managers);
    output::success("Fixtures loaded");
    Ok(())
}

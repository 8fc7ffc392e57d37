//! Fixture loading for the `seed` command.
//!
//! Fixtures are a JSON document with `stores`, `products`, `pricing` and
//! `managers` arrays. Seeding never overwrites: rows and documents whose IDs
//! already exist are skipped.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::adapter::outbound::sqlite::catalog::SqliteCatalog;
use crate::domain::{Manager, PricingRow, Product, Store};
use crate::error::Result;
use crate::port::outbound::directory::ManagerDirectory;

const SAMPLE: &str = include_str!("../../fixtures/sample.json");

/// A set of records to load into both stores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub pricing: Vec<PricingRow>,
    #[serde(default)]
    pub managers: Vec<Manager>,
}

impl Fixtures {
    /// The built-in demo data set.
    ///
    /// # Errors
    /// Returns an error if the embedded JSON is malformed.
    pub fn sample() -> Result<Self> {
        Self::parse_json(SAMPLE)
    }

    /// Read fixtures from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parse fixtures from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the JSON does not match the fixture shape.
    pub fn parse_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Rows and documents actually written by [`seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub stores: usize,
    pub products: usize,
    pub pricing: usize,
    pub managers: usize,
}

/// Load `fixtures` into the catalog and the manager directory.
///
/// Stores and products are written before pricing rows so foreign keys
/// resolve.
///
/// # Errors
/// Returns an error if any write fails. Earlier writes are not rolled back.
pub async fn seed<M>(
    catalog: &SqliteCatalog,
    directory: &M,
    fixtures: &Fixtures,
) -> Result<SeedReport>
where
    M: ManagerDirectory,
{
    let mut report = SeedReport {
        stores: catalog.insert_stores(&fixtures.stores)?,
        products: catalog.insert_products(&fixtures.products)?,
        pricing: catalog.insert_pricing(&fixtures.pricing)?,
        managers: 0,
    };

    for manager in &fixtures.managers {
        if directory.find_manager(&manager.id).await?.is_some() {
            debug!(manager_id = %manager.id, "Manager already present, skipped");
            continue;
        }
        directory.insert_manager(manager).await?;
        report.managers += 1;
    }

    info!(
        stores = report.stores,
        products = report.products,
        pricing = report.pricing,
        managers = report.managers,
        "Fixtures loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryDirectory;
    use crate::port::outbound::catalog::Catalog;
    use crate::testkit::db::empty_catalog;

    #[test]
    fn sample_set_parses() {
        let fixtures = Fixtures::sample().unwrap();
        assert!(!fixtures.stores.is_empty());
        assert!(!fixtures.managers.is_empty());
        assert!(fixtures
            .pricing
            .iter()
            .all(|p| fixtures.products.iter().any(|x| x.id == p.product_id)));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let fixtures = Fixtures::parse_json(r#"{ "managers": [] }"#).unwrap();
        assert!(fixtures.stores.is_empty());
        assert!(fixtures.pricing.is_empty());
    }

    #[tokio::test]
    async fn seeding_twice_writes_nothing_new() {
        let catalog = empty_catalog();
        let directory = MemoryDirectory::new();
        let fixtures = Fixtures::sample().unwrap();

        let first = seed(&catalog, &directory, &fixtures).await.unwrap();
        assert_eq!(first.stores, fixtures.stores.len());
        assert_eq!(first.managers, fixtures.managers.len());

        let second = seed(&catalog, &directory, &fixtures).await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(
            catalog.list_stores().await.unwrap().len(),
            fixtures.stores.len()
        );
        assert_eq!(directory.len(), fixtures.managers.len());
    }
}

//! Seeded in-memory data stores.

use crate::adapter::outbound::memory::MemoryDirectory;
use crate::adapter::outbound::sqlite::catalog::SqliteCatalog;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::application::DataContext;

use super::domain;

/// Context over a seeded in-memory catalog and directory.
pub type TestContext = DataContext<SqliteCatalog, MemoryDirectory>;

/// A migrated, empty in-memory catalog.
///
/// # Panics
/// Panics if the pool cannot be created or migrations fail.
pub fn empty_catalog() -> SqliteCatalog {
    let pool = create_pool(":memory:", 1).expect("in-memory pool");
    run_migrations(&pool).expect("migrations");
    SqliteCatalog::new(pool)
}

/// An in-memory catalog holding the canonical stores, products and pricing.
///
/// # Panics
/// Panics if seeding fails.
pub fn seeded_catalog() -> SqliteCatalog {
    let catalog = empty_catalog();
    catalog.insert_stores(&domain::stores()).expect("seed stores");
    catalog.insert_products(&domain::products()).expect("seed products");
    catalog.insert_pricing(&domain::pricing()).expect("seed pricing");
    catalog
}

/// A directory holding the canonical managers.
pub fn seeded_directory() -> MemoryDirectory {
    MemoryDirectory::with_managers(domain::managers())
}

/// A full context over the canonical data set.
///
/// # Panics
/// Panics if seeding fails.
pub fn seeded_context() -> TestContext {
    DataContext::new(seeded_catalog(), seeded_directory())
}

use tempfile::TempDir;

use storekeep::adapter::outbound::memory::MemoryDirectory;
use storekeep::adapter::outbound::sqlite::catalog::SqliteCatalog;
use storekeep::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use storekeep::application::DataContext;
use storekeep::testkit;

/// File-backed SQLite database in a temporary directory.
///
/// Unlike `:memory:`, every pooled connection sees the same data, so tests
/// run against the same pool shape as production.
pub struct TempDb {
    _dir: TempDir,
    catalog: SqliteCatalog,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("storekeep.db");
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = create_pool(&url, 3).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        Self {
            _dir: dir,
            catalog: SqliteCatalog::new(pool),
        }
    }

    /// A database holding the canonical stores, products and pricing.
    pub fn seeded() -> Self {
        let db = Self::create();
        db.catalog
            .insert_stores(&testkit::domain::stores())
            .expect("seed stores");
        db.catalog
            .insert_products(&testkit::domain::products())
            .expect("seed products");
        db.catalog
            .insert_pricing(&testkit::domain::pricing())
            .expect("seed pricing");
        db
    }

    pub fn catalog(&self) -> &SqliteCatalog {
        &self.catalog
    }

    /// Context over this database and a directory holding the canonical managers.
    pub fn context(&self) -> DataContext<SqliteCatalog, MemoryDirectory> {
        DataContext::new(self.catalog.clone(), testkit::db::seeded_directory())
    }
}

//! SQLite catalog implementation.
//!
//! Stores, products and pricing rows live in three tables (`store`,
//! `product`, `product_store`). Every operation is a single parameterized
//! statement on a pooled connection.

use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    ListingRow, PricingRecord, ProductRow, StoreChangeset, StoreRow,
};
use crate::adapter::outbound::sqlite::database::schema::{product, product_store, store};
use crate::domain::{
    ManagerId, PricingRow, Product, ProductId, ProductListing, Store, StoreEdit, StoreId,
    StoreOffer,
};
use crate::error::{Error, Result};
use crate::port::outbound::catalog::Catalog;

const LISTING_QUERY: &str = "\
SELECT p.pid AS pid, p.productdesc AS productdesc, ps.sid AS sid, s.location AS location, ps.price AS price \
FROM product p \
LEFT JOIN product_store ps ON p.pid = ps.pid \
LEFT JOIN store s ON ps.sid = s.sid \
ORDER BY p.pid, s.location";

/// SQLite-backed catalog.
///
/// Implements the [`Catalog`] trait over a shared connection pool.
#[derive(Clone)]
pub struct SqliteCatalog {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteCatalog {
    /// Create a new SQLite catalog with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>>
    {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    fn store_from_row(row: StoreRow) -> Store {
        Store {
            id: StoreId::from(row.sid),
            location: row.location,
            manager_id: row.mgrid.map(ManagerId::from),
        }
    }

    fn parse_price(raw: &str) -> Result<Decimal> {
        Decimal::from_str(raw).map_err(|e| Error::Parse(format!("price {raw:?}: {e}")))
    }

    fn listing_from_row(row: ListingRow) -> Result<ProductListing> {
        let offer = match (row.sid, row.location, row.price) {
            (Some(sid), Some(location), Some(price)) => Some(StoreOffer {
                store_id: StoreId::from(sid),
                location,
                price: Self::parse_price(&price)?,
            }),
            _ => None,
        };
        Ok(ProductListing {
            product_id: ProductId::from(row.pid),
            description: row.productdesc,
            offer,
        })
    }

    /// Insert stores, skipping IDs that already exist. Returns rows written.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_stores(&self, stores: &[Store]) -> Result<usize> {
        let rows: Vec<StoreRow> = stores
            .iter()
            .map(|s| StoreRow {
                sid: s.id.to_string(),
                location: s.location.clone(),
                mgrid: s.manager_id.as_ref().map(ToString::to_string),
            })
            .collect();
        let mut conn = self.conn()?;
        diesel::insert_or_ignore_into(store::table)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert products, skipping IDs that already exist. Returns rows written.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_products(&self, products: &[Product]) -> Result<usize> {
        let rows: Vec<ProductRow> = products
            .iter()
            .map(|p| ProductRow {
                pid: p.id.to_string(),
                productdesc: p.description.clone(),
            })
            .collect();
        let mut conn = self.conn()?;
        diesel::insert_or_ignore_into(product::table)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert pricing rows, skipping (product, store) pairs that already
    /// exist. Returns rows written.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including when a row references
    /// an unknown product or store.
    pub fn insert_pricing(&self, pricing: &[PricingRow]) -> Result<usize> {
        let rows: Vec<PricingRecord> = pricing
            .iter()
            .map(|p| PricingRecord {
                pid: p.product_id.to_string(),
                sid: p.store_id.to_string(),
                price: p.price.to_string(),
            })
            .collect();
        let mut conn = self.conn()?;
        diesel::insert_or_ignore_into(product_store::table)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }
}

impl Catalog for SqliteCatalog {
    async fn list_stores(&self) -> Result<Vec<Store>> {
        let mut conn = self.conn()?;
        let rows: Vec<StoreRow> = store::table
            .select(StoreRow::as_select())
            .order(store::sid.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows.into_iter().map(Self::store_from_row).collect())
    }

    async fn find_store(&self, id: &StoreId) -> Result<Option<Store>> {
        let mut conn = self.conn()?;
        let row: Option<StoreRow> = store::table
            .find(id.as_str())
            .select(StoreRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row.map(Self::store_from_row))
    }

    async fn update_store(&self, id: &StoreId, edit: &StoreEdit) -> Result<bool> {
        let mut conn = self.conn()?;
        let changes = StoreChangeset {
            location: &edit.location,
            mgrid: Some(edit.manager_id.as_str()),
        };
        let updated = diesel::update(store::table.find(id.as_str()))
            .set(&changes)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(updated > 0)
    }

    async fn manager_assigned_elsewhere(
        &self,
        manager_id: &ManagerId,
        store_id: &StoreId,
    ) -> Result<bool> {
        let mut conn = self.conn()?;
        diesel::select(diesel::dsl::exists(
            store::table
                .filter(store::mgrid.eq(manager_id.as_str()))
                .filter(store::sid.ne(store_id.as_str())),
        ))
        .get_result(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))
    }

    async fn list_product_listings(&self) -> Result<Vec<ProductListing>> {
        let mut conn = self.conn()?;
        let rows: Vec<ListingRow> = diesel::sql_query(LISTING_QUERY)
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.into_iter().map(Self::listing_from_row).collect()
    }

    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>> {
        let mut conn = self.conn()?;
        let row: Option<ProductRow> = product::table
            .find(id.as_str())
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row.map(|r| Product::new(r.pid, r.productdesc)))
    }

    async fn pricing_count(&self, id: &ProductId) -> Result<usize> {
        let mut conn = self.conn()?;
        let count: i64 = product_store::table
            .filter(product_store::pid.eq(id.as_str()))
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        usize::try_from(count).map_err(|e| Error::Parse(e.to_string()))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(product::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(deleted > 0)
    }
}

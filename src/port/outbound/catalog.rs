//! Relational store port: stores, products and pricing rows.

use std::future::Future;

use crate::domain::{
    ManagerId, Product, ProductId, ProductListing, Store, StoreEdit, StoreId,
};
use crate::error::Result;

/// Read/update/delete operations against the relational store.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Each call is a single parameterized statement; nothing here is
///   transactional across calls
pub trait Catalog: Send + Sync {
    /// List all stores.
    fn list_stores(&self) -> impl Future<Output = Result<Vec<Store>>> + Send;

    /// Get a store by ID.
    fn find_store(&self, id: &StoreId) -> impl Future<Output = Result<Option<Store>>> + Send;

    /// Replace a store's location and manager. Returns true if the store existed.
    fn update_store(
        &self,
        id: &StoreId,
        edit: &StoreEdit,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// True if `manager_id` is assigned to any store other than `store_id`.
    fn manager_assigned_elsewhere(
        &self,
        manager_id: &ManagerId,
        store_id: &StoreId,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Products left-joined to their pricing rows and stores, ordered by
    /// product ID then store location.
    fn list_product_listings(&self) -> impl Future<Output = Result<Vec<ProductListing>>> + Send;

    /// Get a product by ID.
    fn find_product(&self, id: &ProductId)
        -> impl Future<Output = Result<Option<Product>>> + Send;

    /// Number of pricing rows referencing the product.
    fn pricing_count(&self, id: &ProductId) -> impl Future<Output = Result<usize>> + Send;

    /// Delete a product row. Returns true if the product existed.
    fn delete_product(&self, id: &ProductId) -> impl Future<Output = Result<bool>> + Send;
}

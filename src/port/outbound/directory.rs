//! Document store port for manager records.

use std::future::Future;

use crate::domain::{Manager, ManagerId};
use crate::error::Result;

/// Find/insert operations against the manager collection.
pub trait ManagerDirectory: Send + Sync {
    /// List all managers in collection order.
    fn list_managers(&self) -> impl Future<Output = Result<Vec<Manager>>> + Send;

    /// Get a manager by ID.
    fn find_manager(&self, id: &ManagerId)
        -> impl Future<Output = Result<Option<Manager>>> + Send;

    /// Insert a new manager document.
    fn insert_manager(&self, manager: &Manager) -> impl Future<Output = Result<()>> + Send;
}

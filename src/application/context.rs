//! Injected data-access context.

use std::sync::Arc;

use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::directory::ManagerDirectory;

/// Shared handles to both stores, passed explicitly to every workflow.
///
/// Cloning is cheap; both handles are reference counted.
pub struct DataContext<C, M> {
    catalog: Arc<C>,
    directory: Arc<M>,
}

impl<C, M> DataContext<C, M>
where
    C: Catalog,
    M: ManagerDirectory,
{
    pub fn new(catalog: C, directory: M) -> Self {
        Self::from_shared(Arc::new(catalog), Arc::new(directory))
    }

    pub fn from_shared(catalog: Arc<C>, directory: Arc<M>) -> Self {
        Self { catalog, directory }
    }

    /// Relational store handle.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Document store handle.
    #[must_use]
    pub fn directory(&self) -> &M {
        &self.directory
    }
}

impl<C, M> Clone for DataContext<C, M> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            directory: Arc::clone(&self.directory),
        }
    }
}

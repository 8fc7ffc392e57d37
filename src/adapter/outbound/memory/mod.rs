//! In-memory manager directory for tests and local demos.
//!
//! Keeps managers in insertion order, matching a document collection
//! scanned in natural order. Nothing survives a restart.

use parking_lot::RwLock;

use crate::domain::{Manager, ManagerId};
use crate::error::{Error, Result};
use crate::port::outbound::directory::ManagerDirectory;

/// In-memory manager directory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    managers: RwLock<Vec<Manager>>,
}

impl MemoryDirectory {
    /// Create a new empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with `managers`.
    #[must_use]
    pub fn with_managers(managers: impl IntoIterator<Item = Manager>) -> Self {
        Self {
            managers: RwLock::new(managers.into_iter().collect()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.managers.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.managers.read().is_empty()
    }
}

impl ManagerDirectory for MemoryDirectory {
    async fn list_managers(&self) -> Result<Vec<Manager>> {
        Ok(self.managers.read().clone())
    }

    async fn find_manager(&self, id: &ManagerId) -> Result<Option<Manager>> {
        Ok(self.managers.read().iter().find(|m| &m.id == id).cloned())
    }

    async fn insert_manager(&self, manager: &Manager) -> Result<()> {
        let mut managers = self.managers.write();
        // Mirrors the unique `_id` index of a document collection.
        if managers.iter().any(|m| m.id == manager.id) {
            return Err(Error::Document(format!(
                "duplicate key: _id {}",
                manager.id
            )));
        }
        managers.push(manager.clone());
        Ok(())
    }
}

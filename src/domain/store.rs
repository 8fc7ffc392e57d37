//! Store records and the edit request applied to them.

use serde::{Deserialize, Serialize};

use super::id::{ManagerId, StoreId};

/// A physical store as held in the relational store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub location: String,
    /// Manager currently assigned, if any.
    pub manager_id: Option<ManagerId>,
}

impl Store {
    pub fn new(id: impl Into<StoreId>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            manager_id: None,
        }
    }

    /// Builder-style manager assignment.
    #[must_use]
    pub fn with_manager(mut self, manager_id: impl Into<ManagerId>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }
}

/// Proposed replacement for a store's mutable fields.
///
/// Stores are only ever updated by replacing both fields at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEdit {
    pub location: String,
    pub manager_id: ManagerId,
}

impl StoreEdit {
    pub fn new(location: impl Into<String>, manager_id: impl Into<ManagerId>) -> Self {
        Self {
            location: location.into(),
            manager_id: manager_id.into(),
        }
    }
}

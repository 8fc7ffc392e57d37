//! Workflow outcome types.
//!
//! Validation failures are an expected, successful outcome at the transport
//! level; only infrastructure problems come back as `Err`.

use crate::domain::{Manager, ManagerDraft, ProductId, Store, ValidationReport};

/// Result of a store edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEditOutcome {
    /// The update was written.
    Updated,
    /// Validation failed; `store` is the freshly re-read current state.
    Rejected {
        store: Store,
        report: ValidationReport,
    },
}

impl StoreEditOutcome {
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

/// Result of a manager creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerCreateOutcome {
    /// The manager was inserted.
    Created(Manager),
    /// Validation failed; `draft` is the submitted input.
    Rejected {
        draft: ManagerDraft,
        report: ValidationReport,
    },
}

impl ManagerCreateOutcome {
    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Result of a product deletion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductDeleteOutcome {
    /// The product row was removed.
    Deleted,
    /// No such product; nothing changed.
    Missing,
    /// Pricing rows still reference the product; nothing changed.
    InUse {
        product_id: ProductId,
        pricing_rows: usize,
    },
}

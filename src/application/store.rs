//! Store listing and the validated store edit workflow.

use tracing::{info, warn};

use crate::application::context::DataContext;
use crate::domain::validation::check_store_edit;
use crate::domain::{Field, Rule, Store, StoreEdit, StoreId, ValidationReport};
use crate::error::{Error, Result};
use crate::port::inbound::workflow::StoreEditOutcome;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::directory::ManagerDirectory;

/// Store use cases.
pub struct StoreService<'a, C, M> {
    ctx: &'a DataContext<C, M>,
}

impl<'a, C, M> StoreService<'a, C, M>
where
    C: Catalog,
    M: ManagerDirectory,
{
    pub fn new(ctx: &'a DataContext<C, M>) -> Self {
        Self { ctx }
    }

    /// All stores.
    ///
    /// # Errors
    /// Returns an error if the catalog query fails.
    pub async fn list(&self) -> Result<Vec<Store>> {
        self.ctx.catalog().list_stores().await
    }

    /// A single store.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] for an unknown ID, or a catalog error.
    pub async fn get(&self, id: &StoreId) -> Result<Store> {
        self.ctx
            .catalog()
            .find_store(id)
            .await?
            .ok_or_else(|| Error::not_found("store", id.as_str()))
    }

    /// Validate and apply a store edit.
    ///
    /// Checks run in passes and stop at the first pass that fails:
    /// field lengths, then manager existence in the directory, then whether
    /// the manager already runs a different store. On rejection the current
    /// store is re-read so the form shows what is actually persisted.
    ///
    /// The existence check and the write go to different stores and are not
    /// atomic; a concurrent assignment between them is not detected.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the store does not exist, or any
    /// infrastructure error from either store.
    pub async fn edit(&self, id: &StoreId, edit: StoreEdit) -> Result<StoreEditOutcome> {
        let report = check_store_edit(&edit);
        if !report.is_empty() {
            return self.reject(id, report).await;
        }

        let manager = self.ctx.directory().find_manager(&edit.manager_id).await?;
        if manager.is_none() {
            return self
                .reject(id, ValidationReport::single(Field::ManagerId, Rule::Exists))
                .await;
        }

        if self
            .ctx
            .catalog()
            .manager_assigned_elsewhere(&edit.manager_id, id)
            .await?
        {
            return self
                .reject(id, ValidationReport::single(Field::ManagerId, Rule::Unassigned))
                .await;
        }

        if !self.ctx.catalog().update_store(id, &edit).await? {
            return Err(Error::not_found("store", id.as_str()));
        }

        info!(
            store_id = %id,
            location = %edit.location,
            manager_id = %edit.manager_id,
            "Store updated"
        );
        Ok(StoreEditOutcome::Updated)
    }

    async fn reject(&self, id: &StoreId, report: ValidationReport) -> Result<StoreEditOutcome> {
        warn!(
            store_id = %id,
            failures = ?report.messages(),
            "Store edit rejected"
        );
        let store = self.get(id).await?;
        Ok(StoreEditOutcome::Rejected { store, report })
    }
}

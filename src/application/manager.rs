//! Manager listing and the validated manager creation workflow.

use tracing::{info, warn};

use crate::application::context::DataContext;
use crate::domain::validation::parse_manager;
use crate::domain::{Field, Manager, ManagerDraft, ManagerId, Rule, ValidationReport};
use crate::error::Result;
use crate::port::inbound::workflow::ManagerCreateOutcome;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::directory::ManagerDirectory;

/// Manager use cases.
pub struct ManagerService<'a, C, M> {
    ctx: &'a DataContext<C, M>,
}

impl<'a, C, M> ManagerService<'a, C, M>
where
    C: Catalog,
    M: ManagerDirectory,
{
    pub fn new(ctx: &'a DataContext<C, M>) -> Self {
        Self { ctx }
    }

    /// All managers.
    ///
    /// # Errors
    /// Returns an error if the directory query fails.
    pub async fn list(&self) -> Result<Vec<Manager>> {
        self.ctx.directory().list_managers().await
    }

    /// Validate and insert a new manager.
    ///
    /// Field checks (ID length, name length, salary) all run and accumulate;
    /// the uniqueness lookup only runs once they pass.
    ///
    /// # Errors
    /// Returns an error if the directory lookup or insert fails.
    pub async fn create(&self, draft: ManagerDraft) -> Result<ManagerCreateOutcome> {
        let manager = match parse_manager(&draft) {
            Ok(manager) => manager,
            Err(report) => return Ok(Self::reject(draft, report)),
        };

        if self.exists(&manager.id).await? {
            return Ok(Self::reject(
                draft,
                ValidationReport::single(Field::ManagerId, Rule::Unique),
            ));
        }

        self.ctx.directory().insert_manager(&manager).await?;
        info!(
            manager_id = %manager.id,
            salary = manager.salary,
            "Manager created"
        );
        Ok(ManagerCreateOutcome::Created(manager))
    }

    async fn exists(&self, id: &ManagerId) -> Result<bool> {
        Ok(self.ctx.directory().find_manager(id).await?.is_some())
    }

    fn reject(draft: ManagerDraft, report: ValidationReport) -> ManagerCreateOutcome {
        warn!(
            manager_id = %draft.id,
            failures = ?report.messages(),
            "Manager creation rejected"
        );
        ManagerCreateOutcome::Rejected { draft, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    fn report_of(outcome: ManagerCreateOutcome) -> ValidationReport {
        match outcome {
            ManagerCreateOutcome::Rejected { report, .. } => report,
            ManagerCreateOutcome::Created(m) => panic!("expected rejection, created {}", m.id),
        }
    }

    #[tokio::test]
    async fn valid_manager_is_listed_after_creation() {
        let ctx = testkit::db::seeded_context();
        let service = ManagerService::new(&ctx);

        let outcome = service
            .create(ManagerDraft::new("M050", "Aoife Byrne", "55000"))
            .await
            .unwrap();
        assert!(outcome.is_created());

        let managers = service.list().await.unwrap();
        assert!(managers.contains(&Manager::new("M050", "Aoife Byrne", 55_000)));
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let ctx = testkit::db::seeded_context();
        let service = ManagerService::new(&ctx);
        let report = report_of(
            service
                .create(ManagerDraft::new("M001", "Another Mary", "40000"))
                .await
                .unwrap(),
        );
        assert_eq!(report.messages(), vec!["Manager ID already exists."]);
    }

    #[tokio::test]
    async fn field_failures_skip_uniqueness_lookup() {
        let ctx = testkit::db::seeded_context();
        let service = ManagerService::new(&ctx);
        let report = report_of(
            service
                .create(ManagerDraft::new("M001", "Mary", "40000"))
                .await
                .unwrap(),
        );
        assert!(report.has_field(Field::Name));
        assert!(!report.contains(Field::ManagerId, Rule::Unique));
    }

    #[tokio::test]
    async fn rejection_echoes_the_draft() {
        let ctx = testkit::db::seeded_context();
        let service = ManagerService::new(&ctx);
        let draft = ManagerDraft::new("M0", "Bob", "abc");
        match service.create(draft.clone()).await.unwrap() {
            ManagerCreateOutcome::Rejected { draft: echoed, .. } => assert_eq!(echoed, draft),
            ManagerCreateOutcome::Created(_) => panic!("expected rejection"),
        }
        assert_eq!(service.list().await.unwrap().len(), 3);
    }
}

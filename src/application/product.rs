//! Product listing and the guarded product deletion workflow.

use tracing::{info, warn};

use crate::application::context::DataContext;
use crate::domain::{ProductId, ProductListing};
use crate::error::Result;
use crate::port::inbound::workflow::ProductDeleteOutcome;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::directory::ManagerDirectory;

/// Product use cases.
pub struct ProductService<'a, C, M> {
    ctx: &'a DataContext<C, M>,
}

impl<'a, C, M> ProductService<'a, C, M>
where
    C: Catalog,
    M: ManagerDirectory,
{
    pub fn new(ctx: &'a DataContext<C, M>) -> Self {
        Self { ctx }
    }

    /// Products joined with where they are sold.
    ///
    /// # Errors
    /// Returns an error if the catalog query fails.
    pub async fn list(&self) -> Result<Vec<ProductListing>> {
        self.ctx.catalog().list_product_listings().await
    }

    /// Delete a product unless a pricing row still references it.
    ///
    /// # Errors
    /// Returns an error if the catalog query or delete fails.
    pub async fn delete(&self, id: &ProductId) -> Result<ProductDeleteOutcome> {
        let pricing_rows = self.ctx.catalog().pricing_count(id).await?;
        if pricing_rows > 0 {
            warn!(product_id = %id, pricing_rows, "Product still sold in stores, not deleted");
            return Ok(ProductDeleteOutcome::InUse {
                product_id: id.clone(),
                pricing_rows,
            });
        }

        if self.ctx.catalog().delete_product(id).await? {
            info!(product_id = %id, "Product deleted");
            Ok(ProductDeleteOutcome::Deleted)
        } else {
            warn!(product_id = %id, "Delete requested for unknown product");
            Ok(ProductDeleteOutcome::Missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[tokio::test]
    async fn unsold_product_is_deleted() {
        let ctx = testkit::db::seeded_context();
        let service = ProductService::new(&ctx);
        let id = ProductId::new("AA-3");

        assert_eq!(service.delete(&id).await.unwrap(), ProductDeleteOutcome::Deleted);
        assert!(ctx.catalog().find_product(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn sold_product_is_kept() {
        let ctx = testkit::db::seeded_context();
        let service = ProductService::new(&ctx);
        let id = ProductId::new("AA-1");

        let outcome = service.delete(&id).await.unwrap();
        assert_eq!(
            outcome,
            ProductDeleteOutcome::InUse {
                product_id: id.clone(),
                pricing_rows: 2,
            }
        );
        assert!(ctx.catalog().find_product(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unknown_product_is_missing() {
        let ctx = testkit::db::seeded_context();
        let service = ProductService::new(&ctx);
        let outcome = service.delete(&ProductId::new("ZZ-0")).await.unwrap();
        assert_eq!(outcome, ProductDeleteOutcome::Missing);
    }

    #[tokio::test]
    async fn listing_includes_unsold_products() {
        let ctx = testkit::db::seeded_context();
        let listings = ProductService::new(&ctx).list().await.unwrap();
        assert!(listings
            .iter()
            .any(|l| l.product_id.as_str() == "AA-3" && l.offer.is_none()));
    }
}

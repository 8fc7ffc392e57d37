//! Products, their per-store pricing rows, and the joined listing view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, StoreId};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub description: String,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// A (product, store, price) association.
///
/// The existence of any pricing row for a product blocks its deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRow {
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub price: Decimal,
}

impl PricingRow {
    pub fn new(
        product_id: impl Into<ProductId>,
        store_id: impl Into<StoreId>,
        price: Decimal,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            store_id: store_id.into(),
            price,
        }
    }
}

/// Where a product is sold and for how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreOffer {
    pub store_id: StoreId,
    pub location: String,
    pub price: Decimal,
}

/// One line of the product page.
///
/// Produced by left-joining products to their pricing rows and stores, so a
/// product that is not sold anywhere still appears once with no offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
    pub product_id: ProductId,
    pub description: String,
    pub offer: Option<StoreOffer>,
}

impl ProductListing {
    /// True when this line carries a store and price.
    #[must_use]
    pub fn is_stocked(&self) -> bool {
        self.offer.is_some()
    }
}

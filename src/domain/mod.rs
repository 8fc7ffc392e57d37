//! Storage-agnostic domain types and pure validation.

pub mod id;
pub mod manager;
pub mod product;
pub mod store;
pub mod validation;

pub use id::{ManagerId, ProductId, StoreId};
pub use manager::{Manager, ManagerDraft};
pub use product::{PricingRow, Product, ProductListing, StoreOffer};
pub use store::{Store, StoreEdit};
pub use validation::{Field, Rule, ValidationFailure, ValidationReport};

//! Application services (use cases).
//!
//! These services orchestrate domain validation and coordinate the catalog
//! and manager directory ports to implement the page workflows.

pub mod context;
pub mod manager;
pub mod product;
pub mod store;

pub use context::DataContext;
pub use manager::ManagerService;
pub use product::ProductService;
pub use store::StoreService;

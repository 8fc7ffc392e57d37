//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!   HTTP / CLI ──►│  Application workflows   │
//!                 └───────┬──────────┬───────┘
//!                         │          │
//!                         ▼          ▼
//!                  ┌──────────┐ ┌──────────────────┐
//!                  │ Catalog  │ │ ManagerDirectory │
//!                  │ (SQLite) │ │ (MongoDB/memory) │
//!                  └──────────┘ └──────────────────┘
//! ```
//!
//! - [`outbound::catalog::Catalog`] - relational store: stores, products, pricing
//! - [`outbound::directory::ManagerDirectory`] - document store: managers
//! - [`inbound::workflow`] - outcomes the workflows hand back to drivers

pub mod inbound;
pub mod outbound;

//! Storekeep - store, product and manager administration over two data stores.
//!
//! Stores, products and their per-store pricing live in a relational
//! database; managers live in a document collection. Every write runs a
//! validation workflow first, and rejected input is rendered back on the
//! originating form.
//!
//! # Architecture
//!
//! - [`domain`] - Identifiers, entities and the pure field checks
//! - [`port`] - `Catalog` and `ManagerDirectory` traits plus workflow outcomes
//! - [`application`] - Store edit, manager creation and product deletion workflows
//! - [`adapter`] - SQLite and MongoDB/in-memory stores, the HTTP routes and the CLI
//! - [`infrastructure`] - Configuration, logging, seeding and startup wiring
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB manager directory
//! - `testkit` - Shared fixtures for integration tests
//!
//! # Example
//!
//! ```no_run
//! use storekeep::infrastructure::bootstrap::run_server;
//! use storekeep::infrastructure::config::settings::Config;
//!
//! # async fn demo() -> storekeep::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! config.init_logging();
//! run_server(&config).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

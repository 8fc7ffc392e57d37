//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - The canonical three-store data set and entity builders.
//! - [`db`] - In-memory SQLite catalogs and contexts seeded with that set.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod db;
pub mod domain;

//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed catalog of stores, products and pricing rows
//! using Diesel ORM.

pub mod catalog;
pub mod database;

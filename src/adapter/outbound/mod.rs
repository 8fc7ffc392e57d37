//! Outbound adapters (driven side).

pub mod directory;
pub mod memory;
#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod sqlite;

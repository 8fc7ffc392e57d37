//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two storage dependencies: the relational
//! catalog and the manager document store.

pub mod catalog;
pub mod directory;

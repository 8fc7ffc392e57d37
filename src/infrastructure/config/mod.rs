//! Infrastructure configuration modules.

pub mod database;
pub mod documents;
pub mod logging;
pub mod server;
pub mod settings;

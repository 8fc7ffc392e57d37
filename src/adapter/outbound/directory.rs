//! Runtime-selected manager directory backend.

use crate::adapter::outbound::memory::MemoryDirectory;
#[cfg(feature = "mongodb")]
use crate::adapter::outbound::mongo::MongoDirectory;
use crate::domain::{Manager, ManagerId};
use crate::error::Result;
use crate::port::outbound::directory::ManagerDirectory;

/// Manager directory chosen from configuration at startup.
pub enum Directory {
    Memory(MemoryDirectory),
    #[cfg(feature = "mongodb")]
    Mongo(MongoDirectory),
}

impl Directory {
    /// Short backend name for logs.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "mongodb")]
            Self::Mongo(_) => "mongodb",
        }
    }
}

impl ManagerDirectory for Directory {
    async fn list_managers(&self) -> Result<Vec<Manager>> {
        match self {
            Self::Memory(d) => d.list_managers().await,
            #[cfg(feature = "mongodb")]
            Self::Mongo(d) => d.list_managers().await,
        }
    }

    async fn find_manager(&self, id: &ManagerId) -> Result<Option<Manager>> {
        match self {
            Self::Memory(d) => d.find_manager(id).await,
            #[cfg(feature = "mongodb")]
            Self::Mongo(d) => d.find_manager(id).await,
        }
    }

    async fn insert_manager(&self, manager: &Manager) -> Result<()> {
        match self {
            Self::Memory(d) => d.insert_manager(manager).await,
            #[cfg(feature = "mongodb")]
            Self::Mongo(d) => d.insert_manager(manager).await,
        }
    }
}

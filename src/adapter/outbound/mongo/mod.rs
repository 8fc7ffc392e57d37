//! MongoDB manager directory.
//!
//! Managers are documents `{ _id, name, salary }` in a single collection.

use std::time::Duration;

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Manager, ManagerId};
use crate::error::{Error, Result};
use crate::port::outbound::directory::ManagerDirectory;

/// Stored shape of a manager document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ManagerDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    salary: i64,
}

impl From<&Manager> for ManagerDocument {
    fn from(manager: &Manager) -> Self {
        Self {
            id: manager.id.to_string(),
            name: manager.name.clone(),
            salary: manager.salary,
        }
    }
}

impl From<ManagerDocument> for Manager {
    fn from(doc: ManagerDocument) -> Self {
        Manager::new(doc.id, doc.name, doc.salary)
    }
}

/// MongoDB-backed manager directory.
#[derive(Clone)]
pub struct MongoDirectory {
    client: Client,
    collection: Collection<ManagerDocument>,
}

impl MongoDirectory {
    /// Connect to `uri` and bind to `database.collection`.
    ///
    /// The driver connects lazily; a bad URI fails here, an unreachable
    /// server fails on first use.
    ///
    /// # Errors
    /// Returns an error if the URI cannot be parsed or the client cannot be built.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        debug!(database, collection, "MongoDB client created");
        Ok(Self::from_client(&client, database, collection))
    }

    /// Bind to a collection on an existing client.
    #[must_use]
    pub fn from_client(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            client: client.clone(),
            collection: client.database(database).collection(collection),
        }
    }

    /// Round-trip a `ping` to the server.
    ///
    /// # Errors
    /// Returns an error if the server cannot be reached.
    pub async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// [`ping`](Self::ping), giving up after `limit`.
    ///
    /// Without a limit an unreachable server holds the caller for the
    /// driver's full server selection timeout.
    ///
    /// # Errors
    /// Returns [`Error::Connection`] if no reply arrives in time, or the
    /// ping error itself.
    pub async fn ping_within(&self, limit: Duration) -> Result<()> {
        tokio::time::timeout(limit, self.ping())
            .await
            .map_err(|_| Error::Connection(format!("no reply to ping within {limit:?}")))?
    }
}

impl ManagerDirectory for MongoDirectory {
    async fn list_managers(&self) -> Result<Vec<Manager>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<ManagerDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Manager::from).collect())
    }

    async fn find_manager(&self, id: &ManagerId) -> Result<Option<Manager>> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.as_str() })
            .await?;
        Ok(found.map(Manager::from))
    }

    async fn insert_manager(&self, manager: &Manager) -> Result<()> {
        self.collection
            .insert_one(ManagerDocument::from(manager))
            .await?;
        Ok(())
    }
}

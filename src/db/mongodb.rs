use async_trait::async_trait;
use mongodb::{
    Client, Collection,
    bson::doc,
    options::{
        Acknowledgment, CollectionOptions, ReadPreference, SelectionCriteria, WriteConcern,
    },
};

use super::store::{RecordStore, StorageError};
use crate::config::MongoConfig;
use crate::models::record::Record;

/// Stores records in a MongoDB collection, dialing a new client for every
/// operation.
pub struct MongoStore {
    config: MongoConfig,
}

impl MongoStore {
    pub fn new(config: MongoConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<Client, StorageError> {
        Client::with_uri_str(connection_uri(&self.config.addr))
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    /// Tracking events need no ordering, so writes only wait for the primary
    /// and reads may go to the nearest member.
    fn relaxed_collection(&self, client: &Client) -> Collection<Record> {
        let options = CollectionOptions::builder()
            .write_concern(
                WriteConcern::builder()
                    .w(Acknowledgment::Nodes(1))
                    .journal(false)
                    .build(),
            )
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Nearest {
                options: Default::default(),
            }))
            .build();

        client
            .database(&self.config.database)
            .collection_with_options(&self.config.collection, options)
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn store(&self, record: &Record) -> Result<(), StorageError> {
        let client = self.connect().await?;
        let result = self.relaxed_collection(&client).insert_one(record).await;
        client.shutdown().await;

        result
            .map(|_| ())
            .map_err(|e| StorageError::Write(e.to_string()))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        let client = self.connect().await?;
        let result = client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await;
        client.shutdown().await;

        result
            .map(|_| ())
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

/// Accept either a full connection string or a bare `host[:port][,...]` list.
pub fn connection_uri(addr: &str) -> String {
    if addr.starts_with("mongodb://") || addr.starts_with("mongodb+srv://") {
        addr.to_string()
    } else {
        format!("mongodb://{}", addr)
    }
}

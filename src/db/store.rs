//! Write-only persistence port for tracking records.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::record::Record;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot connect to storage: {0}")]
    Connection(String),

    #[error("cannot write record: {0}")]
    Write(String),
}

/// Destination for tracking records.
///
/// Each call is a single attempt: no retries, no buffering, and no ordering
/// guarantee between concurrent calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn store(&self, record: &Record) -> Result<(), StorageError>;

    /// Liveness probe. Performs no writes.
    async fn ping(&self) -> Result<(), StorageError>;
}

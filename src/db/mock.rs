use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{RecordStore, StorageError};
use crate::models::record::Record;

/// In-memory store that counts calls and can be told to fail.
#[derive(Clone, Default)]
pub struct MockStore {
    records: Arc<RwLock<Vec<Record>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn records(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn store(&self, record: &Record) -> Result<(), StorageError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(StorageError::Connection("storage unreachable".to_string()));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        if *self.should_fail.read().await {
            return Err(StorageError::Connection("storage unreachable".to_string()));
        }
        Ok(())
    }
}

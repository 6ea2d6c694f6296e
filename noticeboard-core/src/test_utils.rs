//! Test helpers
//!
//! Mock storage implementation for service tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::UserStorage;

// ===== MockUserStorage =====

pub struct MockUserStorage {
    documents: RwLock<HashMap<(String, String), serde_json::Value>>,
    /// If Some, read returns this error (for testing the fail-closed path)
    read_error: RwLock<Option<String>>,
    /// If Some, write returns this error (for testing silent-persist failure)
    write_error: RwLock<Option<String>>,
}

impl MockUserStorage {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            read_error: RwLock::new(None),
            write_error: RwLock::new(None),
        }
    }

    pub async fn set_read_error(&self, err: Option<String>) {
        *self.read_error.write().await = err;
    }

    pub async fn set_write_error(&self, err: Option<String>) {
        *self.write_error.write().await = err;
    }

    /// Seed a stored document directly.
    pub async fn insert_document(
        &self,
        collection: &str,
        document_id: &str,
        document: serde_json::Value,
    ) {
        self.documents
            .write()
            .await
            .insert((collection.to_string(), document_id.to_string()), document);
    }

    /// Inspect a stored document.
    pub async fn document(&self, collection: &str, document_id: &str) -> Option<serde_json::Value> {
        self.documents
            .read()
            .await
            .get(&(collection.to_string(), document_id.to_string()))
            .cloned()
    }
}

#[async_trait]
impl UserStorage for MockUserStorage {
    async fn read(
        &self,
        collection: &str,
        document_id: &str,
    ) -> CoreResult<Option<serde_json::Value>> {
        if let Some(ref msg) = *self.read_error.read().await {
            return Err(CoreError::StorageRead(msg.clone()));
        }
        Ok(self.document(collection, document_id).await)
    }

    async fn write(
        &self,
        collection: &str,
        document_id: &str,
        document: &serde_json::Value,
    ) -> CoreResult<()> {
        if let Some(ref msg) = *self.write_error.read().await {
            return Err(CoreError::StorageWrite(msg.clone()));
        }
        self.insert_document(collection, document_id, document.clone())
            .await;
        Ok(())
    }
}

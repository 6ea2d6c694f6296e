//! File-backed user storage.
//!
//! Persists each document as `<root>/<collection>/<document_id>.json`.
//! Meant for CLI hosts and tests; dashboard hosts inject their platform
//! storage API instead.

use std::path::PathBuf;

use async_trait::async_trait;

use noticeboard_core::error::{CoreError, CoreResult};
use noticeboard_core::traits::UserStorage;

/// File-backed `UserStorage` adapter.
///
/// The root directory stands in for the host's per-user scoping: one
/// root per user.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, collection: &str, document_id: &str) -> PathBuf {
        self.root.join(collection).join(format!("{document_id}.json"))
    }
}

#[async_trait]
impl UserStorage for JsonFileStore {
    async fn read(
        &self,
        collection: &str,
        document_id: &str,
    ) -> CoreResult<Option<serde_json::Value>> {
        let path = self.document_path(collection, document_id);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => serde_json::from_str(&text).map(Some).map_err(|e| {
                CoreError::StorageRead(format!("Invalid JSON in {}: {e}", path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StorageRead(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn write(
        &self,
        collection: &str,
        document_id: &str,
        document: &serde_json::Value,
    ) -> CoreResult<()> {
        let path = self.document_path(collection, document_id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CoreError::StorageWrite(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let text = serde_json::to_string_pretty(document)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        tokio::fs::write(&path, text).await.map_err(|e| {
            CoreError::StorageWrite(format!("Failed to write {}: {e}", path.display()))
        })
    }
}

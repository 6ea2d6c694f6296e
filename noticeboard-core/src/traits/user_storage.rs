//! Per-user key/value document store abstraction

use async_trait::async_trait;

use crate::error::CoreResult;

/// Host-provided per-user key/value document store.
///
/// Documents are addressed by a collection identifier plus a document
/// identifier and scoped to the current user by the host. The read
/// contract mirrors the host's `{data: <json>|undefined}` response:
/// a missing document is `Ok(None)`, not an error.
///
/// Platform implementations:
/// - Dashboard host: platform storage query/mutation API
/// - CLI / tests: `JsonFileStore`, `MockUserStorage`
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Read a document.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - document exists
    /// * `Ok(None)` - document does not exist
    /// * `Err(CoreError::StorageRead)` - host store failure
    async fn read(
        &self,
        collection: &str,
        document_id: &str,
    ) -> CoreResult<Option<serde_json::Value>>;

    /// Write a document (full overwrite).
    ///
    /// # Arguments
    /// * `collection` - collection identifier
    /// * `document_id` - document identifier
    /// * `document` - JSON-serializable payload
    async fn write(
        &self,
        collection: &str,
        document_id: &str,
        document: &serde_json::Value,
    ) -> CoreResult<()>;
}

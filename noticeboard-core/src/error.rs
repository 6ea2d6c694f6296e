//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Feed fetch failed (network error or non-success status)
    #[error("Feed fetch failed: {detail}")]
    Fetch { detail: String },

    /// Feed response was not the expected JSON array shape
    #[error("Feed parse failed: {detail}")]
    Parse { detail: String },

    /// Host key/value store read failure
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Host key/value store write failure
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Serialization error (stored document or payload)
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error (missing adapter, bad configuration)
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether this is expected degradation (unreachable feed, malformed
    /// feed body) rather than a fault. Used for log classification:
    /// `warn` when `true`, `error` when `false`.
    ///
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Parse { .. } | Self::ValidationError(_)
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

//! Error types for credential storage.

use thiserror::Error;

/// Errors that can occur in a credential store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage engine failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

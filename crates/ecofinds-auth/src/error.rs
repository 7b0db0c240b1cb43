//! Error types for the authentication core.

use ecofinds_store::StoreError;
use thiserror::Error;

/// Result type for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during registration or login.
///
/// The taxonomy is closed: anything the credential store throws is wrapped
/// into [`AuthError::Storage`] rather than propagated raw. No variant
/// carries user-facing text; translating these into screen messages is the
/// caller's job.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Register was called for an email that already has an account.
    #[error("account already exists: {0}")]
    AccountAlreadyExists(String),

    /// Login was called for an email with no account.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// The login password failed hash verification.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A required field was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The credential store failed, or a record could not be
    /// serialized/deserialized.
    #[error("storage failure: {0}")]
    Storage(String),

    /// Password hashing or verification machinery failed.
    #[error("hash error: {0}")]
    Hash(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

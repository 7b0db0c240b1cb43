//! Credential store trait.
//!
//! Defines the interface that all credential store backends implement,
//! enabling pluggable persistence: in-memory for tests, RocksDB on device.

use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A durable key-value store mapping an email to a serialized user record.
///
/// Implementations must tolerate missing keys: `get` for an unknown key
/// returns `Ok(None)`, never an error. `set` overwrites unconditionally;
/// duplicate-account checks belong to the caller.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Retrieves the serialized record for `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persists (overwriting) the serialized record for `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

// Implement CredentialStore for Arc<T> so a single store can be shared.
#[async_trait]
impl<T: CredentialStore> CredentialStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}

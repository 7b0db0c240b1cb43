//! Credential storage for EcoFinds.
//!
//! This crate provides the persistence seam for user accounts: a key-value
//! [`CredentialStore`] mapping an email to a serialized user record, with an
//! in-memory backend for tests and a RocksDB backend for device-local
//! durability.

mod error;
#[cfg(feature = "memory")]
mod memory;
#[cfg(feature = "rocksdb-backend")]
mod rocks;
mod store;

pub use error::StoreError;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
#[cfg(feature = "rocksdb-backend")]
pub use rocks::RocksStore;
pub use store::CredentialStore;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

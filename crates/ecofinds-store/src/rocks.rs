//! RocksDB-backed credential store.
//!
//! Device-local persistent storage: records survive process restarts.

use crate::{CredentialStore, Result, StoreError};
use async_trait::async_trait;
use rocksdb::{Options, DB};
use std::path::Path;
use tracing::debug;

/// A persistent credential store backed by RocksDB.
pub struct RocksStore {
    db: DB,
}

impl RocksStore {
    /// Opens the store at `path`, creating it if necessary.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db =
            DB::open(&opts, path.as_ref()).map_err(|e| StoreError::Backend(e.to_string()))?;
        debug!(path = %path.as_ref().display(), "opened credential store");
        Ok(Self { db })
    }
}

#[async_trait]
impl CredentialStore for RocksStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let bytes = self
            .db
            .get(key.as_bytes())
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        bytes
            .map(|b| String::from_utf8(b).map_err(|e| StoreError::Backend(e.to_string())))
            .transpose()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .put(key.as_bytes(), value.as_bytes())
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

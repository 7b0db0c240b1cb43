//! Registration and login over a credential store.

use std::collections::HashMap;
use std::sync::Arc;

use ecofinds_store::CredentialStore;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::{AuthError, Result};
use crate::hash::{hash_password, verify_password, HasherConfig};
use crate::user::UserRecord;

/// Minimum accepted password length at registration.
const MIN_PASSWORD_LEN: usize = 8;

/// Hands out one async mutex per email key so a register call can hold its
/// read-check-write sequence exclusive against other registers for the same
/// account.
#[derive(Default)]
struct KeyLocks {
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl KeyLocks {
    fn lock_for(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(key.to_string()).or_default())
    }
}

/// Local authentication service.
///
/// Registers accounts and validates logins against an injected
/// [`CredentialStore`]; substituting an in-memory store makes the whole
/// flow testable without touching the device.
pub struct AuthService<S> {
    store: S,
    hasher: HasherConfig,
    locks: KeyLocks,
}

impl<S: CredentialStore> AuthService<S> {
    /// Creates a service with default hashing cost.
    pub fn new(store: S) -> Self {
        Self::with_hasher(store, HasherConfig::default())
    }

    /// Creates a service with explicit hashing cost parameters.
    pub fn with_hasher(store: S, hasher: HasherConfig) -> Self {
        Self {
            store,
            hasher,
            locks: KeyLocks::default(),
        }
    }

    /// Registers a new account and persists its record keyed by email.
    ///
    /// Fails with [`AuthError::AccountAlreadyExists`] if a record for the
    /// email is already stored. A failed call writes nothing; a successful
    /// call performs exactly one write.
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord> {
        validate_display_name(display_name)?;
        validate_email(email)?;
        validate_new_password(password)?;

        // Hold the per-email lock across the existence check and the write
        // so two racing registrations cannot both observe an absent record.
        let guard = self.locks.lock_for(email);
        let _held = guard.lock().await;

        if self.store.get(email).await?.is_some() {
            debug!(email, "registration rejected: account exists");
            return Err(AuthError::AccountAlreadyExists(email.to_string()));
        }

        let password_hash = self.hash_blocking(password.to_string()).await?;
        let record = UserRecord {
            display_name: display_name.to_string(),
            email: email.to_string(),
            password_hash,
        };

        let serialized = serde_json::to_string(&record)?;
        self.store.set(email, &serialized).await?;

        debug!(email, "account registered");
        Ok(record)
    }

    /// Validates credentials against the stored record.
    ///
    /// Returns the record on success. [`AuthError::AccountNotFound`] and
    /// [`AuthError::InvalidCredentials`] stay distinct so callers can
    /// handle or count them separately; presenting them identically to end
    /// users is the screen layer's call. Login never writes.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord> {
        validate_email(email)?;
        if password.is_empty() {
            return Err(AuthError::InvalidInput("password is required".to_string()));
        }

        let Some(serialized) = self.store.get(email).await? else {
            debug!(email, "login rejected: no such account");
            return Err(AuthError::AccountNotFound(email.to_string()));
        };
        let record: UserRecord = serde_json::from_str(&serialized)?;

        let matches = self
            .verify_blocking(password.to_string(), record.password_hash.clone())
            .await?;
        if !matches {
            warn!(email, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        debug!(email, "login succeeded");
        Ok(record)
    }

    // Argon2 is CPU-bound; run it off the async executor.
    async fn hash_blocking(&self, password: String) -> Result<String> {
        let config = self.hasher.clone();
        tokio::task::spawn_blocking(move || hash_password(&password, &config))
            .await
            .map_err(|e| AuthError::Hash(e.to_string()))?
    }

    async fn verify_blocking(&self, password: String, stored_hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AuthError::Hash(e.to_string()))?
    }
}

fn validate_display_name(display_name: &str) -> Result<()> {
    if display_name.trim().is_empty() {
        return Err(AuthError::InvalidInput(
            "display name is required".to_string(),
        ));
    }
    Ok(())
}

// Emails are compared byte-for-byte, uppercase and lowercase distinct;
// callers that want case-insensitive accounts normalize before calling.
fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(AuthError::InvalidInput("email is required".to_string()));
    }
    Ok(())
}

fn validate_new_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(AuthError::InvalidInput("password is required".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

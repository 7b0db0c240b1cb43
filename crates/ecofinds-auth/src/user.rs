//! User account record.

use serde::{Deserialize, Serialize};

/// A persisted user account, keyed in the credential store by email.
///
/// Serializes with camelCase keys (`displayName`, `email`, `passwordHash`)
/// to match the record layout the app already writes on device.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Human-readable name chosen at registration, immutable thereafter.
    pub display_name: String,
    /// Unique account identifier; doubles as the storage key.
    pub email: String,
    /// Salted one-way hash of the account password, as a PHC string.
    ///
    /// Never the plaintext password. Callers must not display it.
    pub password_hash: String,
}

// password_hash is credential material; keep it out of Debug output.
impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

//! Local authentication for EcoFinds.
//!
//! Registration and login over a pluggable [`CredentialStore`]. Passwords
//! are hashed with a salted, tunable-cost one-way hash before they are
//! persisted; plaintext never reaches storage or logs.
//!
//! [`CredentialStore`]: ecofinds_store::CredentialStore

mod error;
mod hash;
mod service;
mod user;

pub use error::{AuthError, Result};
pub use hash::{hash_password, verify_password, HasherConfig};
pub use service::AuthService;
pub use user::UserRecord;

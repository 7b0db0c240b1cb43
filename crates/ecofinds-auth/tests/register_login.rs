//! End-to-end signup/login flow.
//!
//! Drives the auth service the way the screens do:
//! 1. A new user signs up from the signup screen
//! 2. The login screen validates the same credentials
//! 3. Bad credentials and duplicate signups are rejected
//!
//! Runs against the in-memory store; persistence across restarts is
//! covered by the store crate's backend tests.

use std::sync::Arc;

use ecofinds_auth::{AuthError, AuthService, HasherConfig, UserRecord};
use ecofinds_store::{CredentialStore, MemoryStore};

fn test_service(store: Arc<MemoryStore>) -> AuthService<Arc<MemoryStore>> {
    // Cheap hashing cost; the flow under test is cost-independent.
    let hasher = HasherConfig {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    };
    AuthService::with_hasher(store, hasher)
}

#[tokio::test]
async fn signup_then_login_flow() {
    let store = Arc::new(MemoryStore::new());
    let auth = test_service(Arc::clone(&store));

    let created = auth
        .register("Alice", "alice@x.com", "password123")
        .await
        .unwrap();
    assert_eq!(created.display_name, "Alice");
    assert_eq!(created.email, "alice@x.com");

    // The dashboard greets the user with the record login returns.
    let user = auth.login("alice@x.com", "password123").await.unwrap();
    assert_eq!(user.display_name, "Alice");
    assert_eq!(user.email, "alice@x.com");

    // A second signup for the same email bounces back to the login screen.
    let err = auth
        .register("Alice", "alice@x.com", "password123")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AccountAlreadyExists(_)));

    // Unknown account and wrong password are distinct failures.
    let err = auth.login("bob@x.com", "anything").await.unwrap_err();
    assert!(matches!(err, AuthError::AccountNotFound(_)));
    let err = auth.login("alice@x.com", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn persisted_record_uses_the_app_layout() {
    let store = Arc::new(MemoryStore::new());
    let auth = test_service(Arc::clone(&store));

    auth.register("Alice", "alice@x.com", "password123")
        .await
        .unwrap();

    // The on-device value is JSON with camelCase keys and a hashed password.
    let raw = store.get("alice@x.com").await.unwrap().unwrap();
    let record: UserRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(record.display_name, "Alice");
    assert_eq!(record.email, "alice@x.com");
    assert!(raw.contains("displayName"));
    assert!(raw.contains("passwordHash"));
    assert!(!raw.contains("password123"));
}

#[tokio::test]
async fn login_sees_records_written_by_an_earlier_service() {
    let store = Arc::new(MemoryStore::new());

    // Registration and login happen in separate app sessions; only the
    // store carries state between them.
    test_service(Arc::clone(&store))
        .register("Alice", "alice@x.com", "password123")
        .await
        .unwrap();

    let user = test_service(store)
        .login("alice@x.com", "password123")
        .await
        .unwrap();
    assert_eq!(user.display_name, "Alice");
}

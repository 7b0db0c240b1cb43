//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2id using a fresh random salt per call
//! and stored as PHC strings. Verification reads the parameters back out of
//! the stored string, so records hashed under older cost settings remain
//! verifiable after the defaults change.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AuthError, Result};

/// Cost parameters for password hashing.
///
/// Defaults match the argon2 library defaults. Lower values are useful in
/// tests; production callers should keep or raise the defaults.
#[derive(Debug, Clone)]
pub struct HasherConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of iterations (time cost).
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        let params = Params::default();
        Self {
            memory_kib: params.m_cost(),
            iterations: params.t_cost(),
            parallelism: params.p_cost(),
        }
    }
}

impl HasherConfig {
    fn hasher(&self) -> Result<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AuthError::Hash(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashes a password with a fresh random salt, returning a PHC string.
pub fn hash_password(password: &str, config: &HasherConfig) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    config
        .hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verifies a password against a stored PHC hash string.
///
/// A mismatch is `Ok(false)`; a malformed stored hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Cheap parameters so tests stay fast; correctness is cost-independent.
    fn fast_config() -> HasherConfig {
        HasherConfig {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn hash_then_verify_succeeds() {
        let hash = hash_password("password123", &fast_config()).unwrap();
        assert!(verify_password("password123", &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("password123", &fast_config()).unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn hash_is_never_the_plaintext() {
        let hash = hash_password("password123", &fast_config()).unwrap();
        assert_ne!(hash, "password123");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn same_password_hashes_differently_across_calls() {
        let config = fast_config();
        let first = hash_password("password123", &config).unwrap();
        let second = hash_password("password123", &config).unwrap();
        assert_ne!(first, second);
        assert!(verify_password("password123", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let result = verify_password("password123", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::Hash(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn any_password_round_trips(password in "[ -~]{1,24}") {
            let hash = hash_password(&password, &fast_config()).unwrap();
            prop_assert!(verify_password(&password, &hash).unwrap());
            prop_assert_ne!(&hash, &password);
        }
    }
}

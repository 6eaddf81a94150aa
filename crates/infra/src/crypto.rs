//! Credential hygiene: password hashing and API-key generation.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{distributions::Alphanumeric, Rng};
use thiserror::Error;

/// Length of generated API keys (opaque alphanumeric bearer secrets).
const API_KEY_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("password hashing error: {0}")]
    PasswordHash(String),
}

/// Argon2id hashing helper.
///
/// One instance is shared per process so parameter choices stay consistent.
/// Verification against stored hashes reads the parameters from the PHC
/// string, so parameter upgrades do not invalidate existing accounts.
#[derive(Debug, Default)]
pub struct PasswordCrypto {
    argon2: Argon2<'static>,
}

impl PasswordCrypto {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a password into a PHC string with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, CryptoError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CryptoError::PasswordHash(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Verify a candidate password against a stored PHC string.
    ///
    /// A malformed stored hash verifies as false rather than erroring; the
    /// caller's response must not distinguish the two.
    pub fn verify_password(&self, password: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Generate a fresh opaque API key: 32 alphanumeric chars from the thread's
/// CSPRNG. Generated once per account, at creation.
pub fn generate_api_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(API_KEY_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let crypto = PasswordCrypto::new();
        let hash = crypto.hash_password("Pass123!").unwrap();

        assert!(crypto.verify_password("Pass123!", &hash));
        assert!(!crypto.verify_password("notcorrect", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let crypto = PasswordCrypto::new();
        let a = crypto.hash_password("Pass123!").unwrap();
        let b = crypto.hash_password("Pass123!").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_verifies_false() {
        let crypto = PasswordCrypto::new();

        assert!(!crypto.verify_password("Pass123!", "not-a-phc-string"));
    }

    #[test]
    fn api_keys_are_opaque_alphanumeric() {
        let key = generate_api_key();

        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(key, generate_api_key());
    }
}

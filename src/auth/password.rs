//! Delete-password hashing for anonboard.
//!
//! Uses Argon2id. Hashing is CPU-bound, so the async helpers run it on the
//! blocking thread pool.

use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use thiserror::Error;

use crate::config::PasswordConfig;
use crate::{BoardError, Result};

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password is empty.
    #[error("password is required")]
    Empty,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    TooLong,

    /// Argon2 parameters were rejected.
    #[error("invalid hashing parameters: {0}")]
    InvalidParams(String),

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),
}

impl From<PasswordError> for BoardError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::Empty | PasswordError::TooLong => BoardError::Validation(err.to_string()),
            PasswordError::InvalidParams(_) => BoardError::Config(err.to_string()),
            PasswordError::HashError(_) => BoardError::PasswordHash(err.to_string()),
        }
    }
}

/// One-way hashing of delete passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password.
    fn hash(&self, password: &str) -> std::result::Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed stored hash never matches.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Shared handle to a password hasher.
pub type SharedHasher = Arc<dyn PasswordHasher>;

/// Argon2id implementation of [`PasswordHasher`].
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with the configured cost parameters.
    pub fn new(config: &PasswordConfig) -> std::result::Result<Self, PasswordError> {
        let params = Params::new(
            config.memory_cost_kib,
            config.time_cost,
            config.parallelism,
            None,
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    /// Argon2's recommended parameters (m=19456, t=2, p=1).
    fn default() -> Self {
        Self {
            params: Params::DEFAULT,
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> std::result::Result<String, PasswordError> {
        validate_password(password)?;

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashError(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        // Parameters are taken from the stored hash
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Validate password requirements.
///
/// A delete password must be non-empty and at most 128 characters.
pub fn validate_password(password: &str) -> std::result::Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

/// Hash a password on the blocking pool.
pub async fn hash_blocking(hasher: &SharedHasher, password: &str) -> Result<String> {
    let hasher = Arc::clone(hasher);
    let password = password.to_owned();

    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| BoardError::PasswordHash(format!("hashing task failed: {e}")))??;

    Ok(hash)
}

/// Verify a password on the blocking pool.
pub async fn verify_blocking(hasher: &SharedHasher, password: &str, hash: &str) -> Result<bool> {
    let hasher = Arc::clone(hasher);
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| BoardError::PasswordHash(format!("verification task failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> Argon2Hasher {
        Argon2Hasher::new(&PasswordConfig {
            memory_cost_kib: 1024,
            time_cost: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_password_format() {
        let hash = cheap_hasher().hash("test_password").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("$v=19$"));
        assert!(hash.contains("m=1024"));
        assert!(hash.contains("t=1"));
    }

    #[test]
    fn test_hash_password_different_hashes() {
        let hasher = cheap_hasher();
        let hash1 = hasher.hash("same_password").unwrap();
        let hash2 = hasher.hash("same_password").unwrap();

        // Different salts
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password() {
        let hasher = cheap_hasher();
        let hash = hasher.hash("correct_password").unwrap();

        assert!(hasher.verify("correct_password", &hash));
        assert!(!hasher.verify("wrong_password", &hash));
        assert!(!hasher.verify("", &hash));
    }

    #[test]
    fn test_verify_invalid_hash() {
        assert!(!cheap_hasher().verify("any_password", "not_a_valid_hash"));
    }

    #[test]
    fn test_default_hasher_params() {
        let hash = Argon2Hasher::default().hash("pw").unwrap();
        assert!(hash.contains("m=19456"));
        assert!(hash.contains("t=2"));
        assert!(hash.contains("p=1"));
    }

    #[test]
    fn test_invalid_params() {
        let result = Argon2Hasher::new(&PasswordConfig {
            memory_cost_kib: 1,
            time_cost: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(PasswordError::InvalidParams(_))));
    }

    #[test]
    fn test_validate_password() {
        assert!(matches!(validate_password(""), Err(PasswordError::Empty)));
        assert!(validate_password("x").is_ok());
        assert!(validate_password(&"a".repeat(128)).is_ok());
        assert!(matches!(
            validate_password(&"a".repeat(129)),
            Err(PasswordError::TooLong)
        ));
    }

    #[test]
    fn test_password_error_into_board_error() {
        assert!(matches!(
            BoardError::from(PasswordError::Empty),
            BoardError::Validation(_)
        ));
        assert!(matches!(
            BoardError::from(PasswordError::HashError("x".into())),
            BoardError::PasswordHash(_)
        ));
    }

    #[tokio::test]
    async fn test_blocking_helpers() {
        let hasher: SharedHasher = Arc::new(cheap_hasher());

        let hash = hash_blocking(&hasher, "pw").await.unwrap();
        assert!(verify_blocking(&hasher, "pw", &hash).await.unwrap());
        assert!(!verify_blocking(&hasher, "nope", &hash).await.unwrap());

        let err = hash_blocking(&hasher, "").await.unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
    }

    #[test]
    fn test_password_with_unicode() {
        let hasher = cheap_hasher();
        let hash = hasher.hash("パスワード123").unwrap();
        assert!(hasher.verify("パスワード123", &hash));
    }
}

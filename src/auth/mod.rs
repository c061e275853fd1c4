//! Password handling for anonboard.
//!
//! Threads and replies carry a per-entity delete password; there are no
//! accounts.

mod password;

pub use password::{
    hash_blocking, validate_password, verify_blocking, Argon2Hasher, PasswordError,
    PasswordHasher, SharedHasher, MAX_PASSWORD_LENGTH,
};

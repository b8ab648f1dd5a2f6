//! Password hashing.
//!
//! Passwords are stored as the hex SHA-256 digest of `password || salt`, with a fresh
//! random salt per account. Login recomputes the digest with the stored salt.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Number of random bytes in a generated salt.
const SALT_LENGTH: usize = 16;

/// Generates a random hex-encoded salt.
pub fn generate_salt() -> String {
    let bytes: [u8; SALT_LENGTH] = rand::random();
    hex::encode(bytes)
}

/// Hashes `password` with `salt`.
///
/// Deterministic: the same pair always yields the same lowercase hex digest.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks `password` against a stored digest and salt.
///
/// Digests are compared in constant time.
pub fn verify_password(password: &str, salt: &str, stored: &str) -> bool {
    hash_password(password, salt)
        .as_bytes()
        .ct_eq(stored.as_bytes())
        .into()
}

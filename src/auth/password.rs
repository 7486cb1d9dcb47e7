//! # Password hashing
//!
//! Thin wrappers over bcrypt so the cost factor lives in one place.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::Result;

/// Hash a plaintext credential for storage.
pub fn hash_password(plaintext: &str) -> Result<String> {
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Check a plaintext credential against a stored hash.
///
/// A malformed stored hash reads as "no match" rather than an error, so the
/// login path stays on its generic-unauthorized response.
#[must_use]
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    verify(plaintext, stored_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn test_malformed_hash_is_no_match() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    }
}

//! # Authentication module
//!
//! Password hashing and JWT issue/validate. Tokens are role-scoped: the role
//! the caller logged in as is baked into the claims and a token can never act
//! as a different role, even when the same email exists in another identity
//! table. Revocation is handled by the `access_tokens` registry, keyed by the
//! token's `jti`.

pub mod jwt;
pub mod password;

pub use jwt::{JwtClaims, JwtManager};
pub use password::{hash_password, verify_password};

/// Extract the token from an `Authorization: Bearer <token>` header value.
#[must_use]
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token("abc"), None);
    }
}

//! JWT token management
//!
//! Token generation and validation. Claims carry the caller's role and
//! identity-table id plus a `jti` used by the revocation registry.

use chrono::Utc;
use entity::StaffRole;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::{internal_error, unauthorized};

const ISSUER: &str = "gym-api";

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Identity-table id of the caller.
    pub sub: i32,
    /// Role the token is scoped to.
    pub role: StaffRole,
    /// Email at issue time, informational only.
    pub email: String,
    /// Token id, mirrored in the `access_tokens` registry.
    pub jti: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// JWT token manager.
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: i64,
}

impl JwtManager {
    /// Create a manager from the configured secret and token lifetime.
    #[must_use]
    pub fn new(secret: &str, expires_in: i64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.validate_exp = true;
        validation.leeway = 30;

        Self {
            encoding_key,
            decoding_key,
            validation,
            expires_in,
        }
    }

    /// Issue a token scoped to a single role.
    pub fn issue_token(&self, role: StaffRole, actor_id: i32, email: &str) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: actor_id,
            role,
            email: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: ISSUER.to_string(),
            iat: now,
            exp: now + self.expires_in,
        };

        let header = Header::new(Algorithm::HS256);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| internal_error!("token generation failed: {}", e))?;

        Ok(IssuedToken { token, claims })
    }

    /// Validate and parse a presented token.
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims> {
        let token_data: TokenData<JwtClaims> = decode(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    unauthorized!("token expired")
                }
                _ => unauthorized!("invalid token"),
            })?;

        Ok(token_data.claims)
    }

    /// Configured token lifetime in seconds.
    #[must_use]
    pub const fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

/// A freshly issued token together with its claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: JwtClaims,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_manager() -> JwtManager {
        JwtManager::new("test-secret-key-for-jwt-testing", 3600)
    }

    #[test]
    fn test_token_generation_and_validation() {
        let manager = create_test_manager();

        let issued = manager
            .issue_token(StaffRole::Owner, 1, "owner@gym.local")
            .unwrap();

        let claims = manager.validate_token(&issued.token).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.role, StaffRole::Owner);
        assert_eq!(claims.email, "owner@gym.local");
        assert_eq!(claims.jti, issued.claims.jti);
    }

    #[test]
    fn test_role_is_scoped_per_token() {
        let manager = create_test_manager();

        let owner = manager
            .issue_token(StaffRole::Owner, 1, "same@gym.local")
            .unwrap();
        let trainer = manager
            .issue_token(StaffRole::Trainer, 1, "same@gym.local")
            .unwrap();

        // Same id and email, distinct scopes and token ids.
        assert_ne!(owner.claims.jti, trainer.claims.jti);
        assert_eq!(
            manager.validate_token(&owner.token).unwrap().role,
            StaffRole::Owner
        );
        assert_eq!(
            manager.validate_token(&trainer.token).unwrap().role,
            StaffRole::Trainer
        );
    }

    #[test]
    fn test_invalid_token() {
        let manager = create_test_manager();

        assert!(manager.validate_token("invalid-token").is_err());
        assert!(manager.validate_token("").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager = create_test_manager();
        let other = JwtManager::new("a-different-secret-entirely", 3600);

        let issued = manager
            .issue_token(StaffRole::FrontDesk, 9, "desk@gym.local")
            .unwrap();
        assert!(other.validate_token(&issued.token).is_err());
    }
}

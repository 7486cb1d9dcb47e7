//! # Error type definitions

use std::collections::BTreeMap;

use thiserror::Error;

/// Field-level validation errors, keyed by field name.
///
/// Ordered map so error payloads are stable across runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Require a non-empty value, recording an error when absent.
    pub fn require<'a>(&mut self, field: &str, value: Option<&'a str>) -> Option<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.add(field, format!("The {field} field is required."));
                None
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the accumulated errors, erroring when any were recorded.
    pub fn into_result(self) -> super::Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation { errors: self })
        }
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

/// Application error type.
///
/// The `Database`/`Internal` variants keep their detail for logs only; the
/// HTTP mapping surfaces a generic message for them.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed field-level validation.
    #[error("validation failed")]
    Validation { errors: FieldErrors },

    /// An entity id (or name) did not resolve.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Missing, invalid, expired or revoked credentials.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Authenticated, but the token's role does not grant this route.
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// Persistence failure.
    #[error("database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Configuration loading/parsing failure.
    #[error("config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Anything else unexpected.
    #[error("internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl AppError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    /// Single-field validation failure.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        Self::Validation { errors }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal {
            message: format!("password hashing failed: {err}"),
            source: Some(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::new();
        errors.require("first_name", None);
        errors.require("phone", Some("  "));
        assert!(errors.require("last_name", Some("Doe")).is_some());
        errors.add("email", "The email has already been taken.");

        assert!(errors.contains("first_name"));
        assert!(errors.contains("phone"));
        assert!(!errors.contains("last_name"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_field_errors_pass() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_db_error_conversion() {
        let err: AppError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, AppError::Database { .. }));
    }
}

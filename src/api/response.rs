//! # API response structures
//!
//! Two envelopes exist for compatibility with the dashboard:
//!
//! - the standard envelope `{status, data?, message?, errors?}` used by every
//!   resource controller, and
//! - the legacy envelope `{success, data}` used by the reporting endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, FieldErrors};

/// Standard envelope body.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Standard API responses.
#[derive(Debug)]
pub enum ApiResponse<T: Serialize> {
    /// 200 with data.
    Success(T),
    /// 200 with data and a message.
    SuccessWithMessage(T, String),
    /// 201 with data and a message.
    Created(T, String),
    /// 200 with a message only.
    Message(String),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let (status, data, message) = match self {
            Self::Success(data) => (StatusCode::OK, Some(data), None),
            Self::SuccessWithMessage(data, message) => (StatusCode::OK, Some(data), Some(message)),
            Self::Created(data, message) => (StatusCode::CREATED, Some(data), Some(message)),
            Self::Message(message) => (StatusCode::OK, None, Some(message)),
        };

        (
            status,
            Json(Envelope {
                status: "success",
                data,
                message,
                errors: None,
            }),
        )
            .into_response()
    }
}

/// Legacy `{success, data}` envelope, kept for the reporting endpoints.
#[derive(Debug, Serialize)]
pub struct LegacyResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> LegacyResponse<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for LegacyResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            Self::Validation { errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "The given data was invalid.".to_string(),
                Some(errors),
            ),
            Self::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{resource} not found"), None)
            }
            Self::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message, None),
            Self::Forbidden { message } => (StatusCode::FORBIDDEN, message, None),
            // Internal detail is logged, never surfaced to the caller.
            Self::Database { message, .. }
            | Self::Config { message, .. }
            | Self::Internal { message, .. } => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        (
            status,
            Json(Envelope::<()> {
                status: "error",
                data: None,
                message: Some(message),
                errors,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let envelope = Envelope {
            status: "success",
            data: Some(serde_json::json!({"id": 1})),
            message: None,
            errors: None,
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["id"], 1);
        assert!(value.get("message").is_none());
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_legacy_envelope_serialization() {
        let value = serde_json::to_value(LegacyResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_validation_error_payload() {
        let mut errors = FieldErrors::new();
        errors.add("email", "The email has already been taken.");
        let value =
            serde_json::to_value(Envelope::<()> {
                status: "error",
                data: None,
                message: Some("The given data was invalid.".to_string()),
                errors: Some(errors),
            })
            .unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(
            value["errors"]["email"][0],
            "The email has already been taken."
        );
    }
}

//! The JSON envelope every endpoint answers with, and the error type that
//! renders into it.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use learngap_core::error::ValidationError;

/// `{ success, data, error }`, with exactly one of `data` and `error` set.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Request failures, split by whose fault they are.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client sent something unusable. Rendered as 400 with the message.
    #[error("{0}")]
    Validation(String),

    /// Something broke on our side. Rendered as 500; the message must be
    /// safe to show to clients.
    #[error("{0}")]
    Processing(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_has_exactly_one_payload() {
        let ok = serde_json::to_value(ApiResponse::ok(42)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 42, "error": null}));

        let err = serde_json::to_value(ApiResponse::<()>::failure("nope")).unwrap();
        assert_eq!(
            err,
            serde_json::json!({"success": false, "data": null, "error": "nope"})
        );
    }

    #[test]
    fn status_by_kind() {
        assert_eq!(
            ApiError::from(ValidationError::MissingDataSource).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Processing("Failed to convert content".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every error is rendered as the same JSON body:
//!
//! ```json
//! {"error": {"code": "UNAUTHORIZED", "message": "Invalid API key"}}
//! ```
//!
//! For denials the message is exactly the [`DenyReason`] description, so
//! clients can tell the three 401 cases apart only by this text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rtb_core::DenyReason;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "NOT_FOUND").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The access guard rejected the request (401).
    #[error("{0}")]
    Unauthorized(#[from] DenyReason),

    /// No route matched the request path (404).
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Unauthorized(reason) => (
                StatusCode::from_u16(reason.status_code()).unwrap_or(StatusCode::UNAUTHORIZED),
                "UNAUTHORIZED",
            ),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    /// Helper to extract status and body from a Response.
    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[test]
    fn unauthorized_status_code() {
        let err = AppError::from(DenyReason::InvalidCredential);
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(code, "UNAUTHORIZED");
    }

    #[test]
    fn not_found_status_code() {
        let err = AppError::NotFound("/api/nope".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn unauthorized_display_is_bare_reason() {
        assert_eq!(
            AppError::from(DenyReason::NotConfigured).to_string(),
            "API key not configured"
        );
    }

    #[tokio::test]
    async fn into_response_carries_each_reason() {
        for reason in [
            DenyReason::NotConfigured,
            DenyReason::MissingAuthorization,
            DenyReason::InvalidCredential,
        ] {
            let (status, body) = response_parts(AppError::from(reason)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body.error.code, "UNAUTHORIZED");
            assert_eq!(body.error.message, reason.to_string());
        }
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(AppError::NotFound("/api/nope".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("/api/nope"));
    }

    #[test]
    fn error_body_serializes() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "UNAUTHORIZED".to_string(),
                message: "Invalid API key".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": {"code": "UNAUTHORIZED", "message": "Invalid API key"}})
        );
    }
}

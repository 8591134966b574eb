//! HTTP request handlers

pub mod auth;
pub mod dashboard;
pub mod data;
pub mod health;
pub mod pages;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use trendbeacon_tiktok::TikTokError;

/// Error body shared by every JSON endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Short description
    pub error: String,
    /// Machine-readable code
    pub code: String,
    /// Extra detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// A JSON error with its status code
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// Error with the given status, description and code
    pub fn new(status: StatusCode, error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.into(),
                code: code.into(),
                details: None,
            },
        }
    }

    /// Attach detail to the body
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.body.details = Some(details);
        self
    }

    /// Status code sent
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<TikTokError> for ApiError {
    fn from(err: TikTokError) -> Self {
        let message = serde_json::Value::String(err.to_string());
        if err.is_upstream() {
            Self::new(StatusCode::BAD_GATEWAY, "TikTok request failed", "UPSTREAM_ERROR")
                .with_details(message)
        } else {
            Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Local storage failed",
                "STORAGE_ERROR",
            )
            .with_details(message)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upstream_errors_are_bad_gateway() {
        let json = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ApiError::from(TikTokError::Json(json));

        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.body.code, "UPSTREAM_ERROR");
    }

    #[test]
    fn test_storage_errors_are_internal() {
        let err = ApiError::from(TikTokError::Io(std::io::Error::other("read-only")));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.code, "STORAGE_ERROR");
        assert_eq!(
            err.body.details,
            Some(serde_json::Value::String("I/O error: read-only".to_string()))
        );
    }

    #[test]
    fn test_body_omits_empty_details() {
        let body = serde_json::to_value(ApiError::new(StatusCode::NOT_FOUND, "Not Found", "ROUTE_NOT_FOUND").body).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Not Found", "code": "ROUTE_NOT_FOUND"}));
    }
}

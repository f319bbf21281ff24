//! HTTP response types for the webhook inspector API
//!
//! Response shapes carry OpenAPI schemas so the generated document always
//! matches what the handlers serialize.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::types::{CapturedWebhook, Error};

/// Response for GET /webhooks
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListWebhooksResponse {
    /// Captured webhooks in arrival order
    pub webhooks: Vec<CapturedWebhook>,
    /// Number of captured webhooks
    pub count: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Standard error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub details: Option<BTreeMap<String, String>>,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: &Error) -> Self {
        Self {
            error: error.to_string(),
            code: error_to_code(error),
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self {
            error: format!("No route for path '{}'", path),
            code: "NOT_FOUND".to_string(),
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Convert error types to stable error codes
fn error_to_code(error: &Error) -> String {
    match error {
        Error::Config(_) => "CONFIG_ERROR".to_string(),
        Error::Io(_) => "IO_ERROR".to_string(),
        Error::Validation { .. } => "VALIDATION_ERROR".to_string(),
        Error::Application(_) => "APPLICATION_ERROR".to_string(),
    }
}

/// Convert error types to HTTP status codes
pub fn error_to_status_code(error: &Error) -> StatusCode {
    match error {
        Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Error::Validation { .. } => StatusCode::BAD_REQUEST,
        Error::Application(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = error_to_status_code(&self);
        let error_response = ErrorResponse::new(&self);
        (status_code, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_webhooks_response_serialization() {
        let response = ListWebhooksResponse {
            webhooks: vec![CapturedWebhook::new(
                "POST".to_string(),
                "/hooks/github".to_string(),
            )],
            count: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("/hooks/github"));
        assert!(json.contains("\"count\":1"));
    }

    #[test]
    fn test_error_response_creation() {
        let error = Error::Validation {
            field: "server.listen".to_string(),
            message: "Invalid listen address".to_string(),
        };

        let response = ErrorResponse::new(&error);
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert!(response.error.contains("Invalid listen address"));
    }

    #[test]
    fn test_error_to_status_code() {
        assert_eq!(
            error_to_status_code(&Error::Validation {
                field: "test".to_string(),
                message: "test".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status_code(&Error::Application("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_to_status_code(&Error::Config(crate::types::ConfigError::Invalid {
                message: "test".to_string()
            })),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

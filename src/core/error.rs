//! Error types and handling for the chat gateway.
//!
//! This module provides a closed error set [`GatewayError`] for everything
//! that can go wrong while talking to the upstream API, with each variant
//! mapped to an explicit HTTP status in its [`IntoResponse`] conversion.
//! Response bodies carry a single `detail` string.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors produced by the completion client.
///
/// Malformed request bodies never reach this type; axum's `Json` extractor
/// rejects them before the handler runs.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// API key missing from configuration, or rejected by the upstream
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Upstream call exceeded the configured timeout
    #[error("Upstream timeout: {0}")]
    Timeout(String),

    /// Transport-level failure (connect, DNS, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream returned a non-success status
    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Upstream returned a 2xx reply the client could not interpret
    #[error("Malformed upstream response: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            // A missing or rejected key is a deployment problem, not the
            // caller's fault
            GatewayError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Network(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::Schema(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using [`GatewayError`].
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Auth("ANTHROPIC_API_KEY is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Authentication failed: ANTHROPIC_API_KEY is not set"
        );

        let err = GatewayError::Upstream {
            status: 529,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream error (HTTP 529): overloaded");

        let err = GatewayError::Schema("no text content block".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed upstream response: no text content block"
        );
    }

    #[test]
    fn test_auth_error_response() {
        let err = GatewayError::Auth("invalid x-api-key".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_response() {
        let err = GatewayError::Timeout("deadline elapsed".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_network_error_response() {
        let err = GatewayError::Network("connection refused".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_upstream_error_response() {
        let err = GatewayError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_schema_error_response() {
        let err = GatewayError::Schema("missing content".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_response_body_carries_detail() {
        let err = GatewayError::Auth("key rejected".to_string());
        let response = err.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Authentication failed: key rejected");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        assert_eq!(returns_result().unwrap(), "success");
    }
}

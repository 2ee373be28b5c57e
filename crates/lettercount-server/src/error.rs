//! Relay error surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Error type for a relay attempt.
#[derive(Debug)]
pub enum RelayError {
    /// Outbound request failed (connect, send, or body read).
    Upstream(reqwest::Error),
    /// Upstream body was not valid JSON.
    Decode(serde_json::Error),
    /// Measured value failed to re-serialize.
    Render(serde_json::Error),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(e) => write!(f, "Upstream request failed: {}", e),
            Self::Decode(e) => write!(f, "Upstream body is not valid JSON: {}", e),
            Self::Render(e) => write!(f, "Failed to render measured value: {}", e),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upstream(e) => Some(e),
            Self::Decode(e) | Self::Render(e) => Some(e),
        }
    }
}

/// Standard JSON error response format.
#[derive(Debug, Serialize, Clone)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Every relay failure collapses to the same generic response. The
/// distinguishing detail goes to the log, not to the client.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "relay request failed");

        let body = ErrorResponse::new("INTERNAL_SERVER_ERROR", "upstream relay failed");
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn decode_error() -> RelayError {
        RelayError::Decode(serde_json::from_str::<serde_json::Value>("nope").unwrap_err())
    }

    #[test]
    fn relay_error_display_carries_detail() {
        let err = decode_error();
        assert!(err.to_string().starts_with("Upstream body is not valid JSON"));
    }

    #[test]
    fn relay_error_exposes_source() {
        let err = decode_error();
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn relay_error_response_is_generic_500() {
        let response = decode_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["message"], "upstream relay failed");
    }

    #[tokio::test]
    async fn all_variants_share_the_same_surface() {
        let render_err =
            RelayError::Render(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        let response = render_err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    }
}

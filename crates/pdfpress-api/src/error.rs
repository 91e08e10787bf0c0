//! Maps conversion errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use pdfpress_converter::ConvertError;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Newtype carrying [`ConvertError`] through Axum's response machinery.
#[derive(Debug)]
pub struct ApiError(pub ConvertError);

impl From<ConvertError> for ApiError {
    fn from(err: ConvertError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            ConvertError::UnsupportedType { .. } => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_TYPE")
            }
            ConvertError::InvalidUpload(_) => (StatusCode::BAD_REQUEST, "INVALID_UPLOAD"),
            ConvertError::Timeout(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONVERSION_TIMEOUT")
            }
            ConvertError::EngineFailed { .. }
            | ConvertError::OutputMissing
            | ConvertError::QueueClosed
            | ConvertError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONVERSION_FAILED"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Conversion request failed");
        }

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.0.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

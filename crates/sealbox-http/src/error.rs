//! HTTP error types for Sealbox

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sealbox_codec::CodecError;
use sealbox_signing::SigningError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the Sealbox HTTP layer
#[derive(Debug, Error)]
pub enum SealboxHttpError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Client error: {0}")]
    ClientError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for SealboxHttpError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            SealboxHttpError::ParseError(msg) => {
                (StatusCode::BAD_REQUEST, "PARSE_ERROR", msg.clone())
            }
            // Whole-request rejections from the core: bad top-level shape
            // or unrepresentable values are the caller's fault
            SealboxHttpError::Codec(e) => (StatusCode::BAD_REQUEST, "CODEC_ERROR", e.to_string()),
            SealboxHttpError::Signing(e) => {
                (StatusCode::BAD_REQUEST, "SIGNING_ERROR", e.to_string())
            }
            SealboxHttpError::ClientError(msg) => {
                (StatusCode::BAD_REQUEST, "CLIENT_ERROR", msg.clone())
            }
            SealboxHttpError::ServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_ERROR",
                msg.clone(),
            ),
            SealboxHttpError::RequestError(e) => {
                (StatusCode::BAD_GATEWAY, "REQUEST_ERROR", e.to_string())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

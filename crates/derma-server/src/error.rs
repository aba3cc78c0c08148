//! Mapping from pipeline failures to wire status codes and messages.
//!
//! The caller only ever sees a generic message; precise causes stay in
//! the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use derma_core::errors::{DermaError, InferenceError, UploadError};

use crate::envelope::ApiEnvelope;

/// Wire message for an oversize upload.
pub fn oversize_message(limit: usize) -> String {
    format!("Payload content length greater than maximum allowed: {limit}")
}

/// Build a fail-envelope response.
pub fn fail_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiEnvelope::fail(message))).into_response()
}

/// Status + message for a failed prediction request.
pub fn predict_failure(err: &DermaError) -> (StatusCode, String) {
    match err {
        DermaError::Upload(UploadError::TooLarge { limit }) => {
            (StatusCode::PAYLOAD_TOO_LARGE, oversize_message(*limit))
        }
        DermaError::Upload(UploadError::Missing) => (
            StatusCode::BAD_REQUEST,
            "No image found in the request".to_string(),
        ),
        DermaError::Upload(UploadError::Malformed { .. }) => (
            StatusCode::BAD_REQUEST,
            "Error uploading image".to_string(),
        ),
        DermaError::Inference(InferenceError::ModelNotReady) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Model is still loading, try again shortly".to_string(),
        ),
        // Decode, inference, and persistence failures all surface the same
        // generic message.
        _ => (
            StatusCode::BAD_REQUEST,
            "Error performing prediction".to_string(),
        ),
    }
}

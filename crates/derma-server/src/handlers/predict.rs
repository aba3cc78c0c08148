//! POST /predict — multipart image upload → prediction record.

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use derma_core::errors::UploadError;

use crate::envelope::ApiEnvelope;
use crate::error::{fail_response, predict_failure};
use crate::state::AppState;

pub async fn predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let image = match extract_image(multipart, state.max_image_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "upload rejected");
            let (status, message) = predict_failure(&err.into());
            return fail_response(status, message);
        }
    };

    match state.pipeline.predict(image).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiEnvelope::success_with_message(
                "Prediction successful",
                record,
            )),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "prediction failed");
            let (status, message) = predict_failure(&err);
            fail_response(status, message)
        }
    }
}

/// Pull the `image` field out of the multipart form, enforcing the file
/// size limit on the extracted bytes.
async fn extract_image(
    multipart: Result<Multipart, MultipartRejection>,
    limit: usize,
) -> Result<Vec<u8>, UploadError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(UploadError::TooLarge { limit });
        }
        Err(rejection) => {
            return Err(UploadError::Malformed {
                reason: rejection.to_string(),
            });
        }
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| multipart_error(e, limit))?;
            if bytes.len() > limit {
                return Err(UploadError::TooLarge { limit });
            }
            return Ok(bytes.to_vec());
        }
    }

    Err(UploadError::Missing)
}

/// A body-limit trip inside the multipart stream is an oversize upload;
/// everything else is a malformed one.
fn multipart_error(err: MultipartError, limit: usize) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge { limit }
    } else {
        UploadError::Malformed {
            reason: err.to_string(),
        }
    }
}

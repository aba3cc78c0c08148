//! GET /predict/histories — full prediction history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::envelope::ApiEnvelope;
use crate::error::fail_response;
use crate::state::AppState;

pub async fn histories(State(state): State<AppState>) -> Response {
    match state.pipeline.histories().await {
        Ok(records) => (StatusCode::OK, Json(ApiEnvelope::success(records))).into_response(),
        Err(err) => {
            error!(error = %err, "history read failed");
            fail_response(
                StatusCode::BAD_REQUEST,
                "Error fetching prediction histories",
            )
        }
    }
}

//! Router construction.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Headroom above the image limit so multipart framing never rejects a
/// maximal legal file; the handler enforces the image limit itself.
const MULTIPART_OVERHEAD_BYTES: usize = 8192;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_image_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .layer(DefaultBodyLimit::max(body_limit))
        .route("/predict/histories", get(handlers::histories::histories))
        .route("/", get(handlers::root::root))
        .with_state(state)
}

//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::pipeline::PredictionPipeline;

/// Process-wide state: the pipeline handle plus upload limits.
/// Cheap to clone; all request handling goes through the pipeline.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PredictionPipeline>,
    pub max_image_bytes: usize,
}

impl AppState {
    pub fn new(pipeline: Arc<PredictionPipeline>, max_image_bytes: usize) -> Self {
        Self {
            pipeline,
            max_image_bytes,
        }
    }
}

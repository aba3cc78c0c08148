//! InferenceEngine — preprocessing plus a classifier provider.

use std::sync::Arc;

use tracing::debug;

use derma_core::errors::DermaResult;
use derma_core::traits::IClassifier;

use crate::preprocess;

/// Scores raw image bytes through preprocess → classifier.
///
/// Read-only after construction; safe to share across requests.
pub struct InferenceEngine {
    classifier: Arc<dyn IClassifier>,
    input_size: u32,
}

impl InferenceEngine {
    pub fn new(classifier: Arc<dyn IClassifier>, input_size: u32) -> Self {
        Self {
            classifier,
            input_size,
        }
    }

    /// Decode the uploaded bytes and return the model's confidence score.
    pub fn score(&self, image_bytes: &[u8]) -> DermaResult<f32> {
        let tensor = preprocess::decode_image(image_bytes, self.input_size)?;
        debug!(shape = ?tensor.shape, "image tensor prepared");
        self.classifier.predict(&tensor)
    }

    /// Name of the underlying classifier provider.
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }
}

//! Deterministic classifier returning a configured score. Test double for
//! the real provider; also useful for wiring checks without model weights.

use derma_core::errors::DermaResult;
use derma_core::models::ImageTensor;
use derma_core::traits::IClassifier;

/// Classifier that always answers with the same confidence score.
pub struct FixedScoreClassifier {
    score: f32,
}

impl FixedScoreClassifier {
    pub fn new(score: f32) -> Self {
        Self { score }
    }
}

impl IClassifier for FixedScoreClassifier {
    fn predict(&self, _input: &ImageTensor) -> DermaResult<f32> {
        Ok(self.score)
    }

    fn name(&self) -> &str {
        "fixed-score"
    }
}

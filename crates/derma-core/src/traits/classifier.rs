use crate::errors::DermaResult;
use crate::models::ImageTensor;

/// Binary image classifier provider.
pub trait IClassifier: Send + Sync {
    /// Score a preprocessed tensor, returning the positive-class
    /// confidence in [0, 1].
    fn predict(&self, input: &ImageTensor) -> DermaResult<f32>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

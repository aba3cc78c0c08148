//! ONNX Runtime classifier provider.
//!
//! Loads the serialized model via the `ort` crate (v2) and reads the first
//! scalar of the output tensor as the positive-class confidence.

use std::path::Path;
use std::sync::Mutex;

use derma_core::errors::{DermaResult, InferenceError};
use derma_core::models::ImageTensor;
use derma_core::traits::IClassifier;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

/// ONNX-based binary classifier using the `ort` crate.
pub struct OnnxClassifier {
    /// Session requires `&mut self` for `run`, so we wrap in Mutex
    /// to satisfy the `&self` trait requirement.
    session: Mutex<Session>,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxClassifier {}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl OnnxClassifier {
    /// Load an ONNX model from the given path.
    ///
    /// # Errors
    /// Returns `InferenceError::ModelLoadFailed` if the model cannot be loaded.
    pub fn load(model_path: &str) -> DermaResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(InferenceError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .with_intra_threads(2)
            .map_err(|e| InferenceError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            model_name,
        })
    }

    /// Run the session on one preprocessed image, returning the raw output.
    fn infer(&self, input: &ImageTensor) -> DermaResult<f32> {
        let shape: Vec<i64> = input.shape.iter().map(|&d| d as i64).collect();

        let input_tensor = Tensor::from_array((shape, input.data.clone())).map_err(|e| {
            InferenceError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;

        let mut session = self.session.lock().map_err(|e| {
            InferenceError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            }
        })?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // Extract the first output tensor.
        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| InferenceError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (_shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| InferenceError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        // The first scalar is the positive-class confidence.
        let score = *data.first().ok_or_else(|| InferenceError::InferenceFailed {
            reason: "empty output tensor".to_string(),
        })?;

        Ok(score)
    }
}

impl IClassifier for OnnxClassifier {
    fn predict(&self, input: &ImageTensor) -> DermaResult<f32> {
        self.infer(input)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

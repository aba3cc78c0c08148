//! # derma-inference
//!
//! Turns uploaded image bytes into a confidence score: preprocessing into
//! the model's tensor shape, classifier providers (ONNX via `ort`, plus a
//! fixed-score provider for tests), and startup fetch of the model artifact.

pub mod engine;
pub mod fetch;
pub mod preprocess;
pub mod providers;

pub use engine::InferenceEngine;
pub use providers::fixed::FixedScoreClassifier;
pub use providers::onnx_classifier::OnnxClassifier;

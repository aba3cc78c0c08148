//! Classifier providers.

pub mod fixed;
pub mod onnx_classifier;

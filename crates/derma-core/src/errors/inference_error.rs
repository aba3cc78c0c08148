/// Inference-layer errors: model fetch/load and per-request scoring.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("model fetch failed from {url}: {reason}")]
    ModelFetchFailed { url: String, reason: String },

    #[error("model load failed at {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("model is not ready")]
    ModelNotReady,

    #[error("image decode failed: {reason}")]
    DecodeFailed { reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },
}

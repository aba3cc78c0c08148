//! Per-subsystem error enums combined into the workspace-wide `DermaError`.

pub mod inference_error;
pub mod storage_error;
pub mod upload_error;

pub use inference_error::InferenceError;
pub use storage_error::StorageError;
pub use upload_error::UploadError;

/// Top-level error type. Subsystem errors convert in via `From`.
#[derive(Debug, thiserror::Error)]
pub enum DermaError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Workspace-wide result alias.
pub type DermaResult<T> = Result<T, DermaError>;

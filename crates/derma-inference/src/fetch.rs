//! Startup fetch of the network-hosted model artifact.

use std::path::{Path, PathBuf};

use tracing::info;

use derma_core::errors::{DermaError, DermaResult, InferenceError};

fn fetch_err(url: &str, reason: impl ToString) -> DermaError {
    InferenceError::ModelFetchFailed {
        url: url.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Ensure the model artifact exists locally, downloading it if needed.
///
/// A file already present at `cache_path` is reused without a network
/// round-trip. Returns the local artifact path.
pub async fn ensure_model(source_url: &str, cache_path: &str) -> DermaResult<PathBuf> {
    let path = PathBuf::from(cache_path);
    if path.exists() {
        info!(path = %path.display(), "model artifact already cached");
        return Ok(path);
    }

    info!(url = source_url, "fetching model artifact");

    let response = reqwest::get(source_url)
        .await
        .map_err(|e| fetch_err(source_url, e))?
        .error_for_status()
        .map_err(|e| fetch_err(source_url, e))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| fetch_err(source_url, e))?;

    if let Some(parent) = path.parent() {
        if parent != Path::new("") {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| fetch_err(source_url, e))?;
        }
    }
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| fetch_err(source_url, e))?;

    info!(path = %path.display(), bytes = bytes.len(), "model artifact fetched");
    Ok(path)
}

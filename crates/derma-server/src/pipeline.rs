//! PredictionPipeline — preprocessing, inference, thresholding, and
//! persistence behind one request-facing surface.

use std::sync::{Arc, OnceLock};

use tracing::info;

use derma_core::errors::{DermaError, DermaResult, InferenceError};
use derma_core::models::PredictionRecord;
use derma_core::traits::IRecordStore;
use derma_inference::InferenceEngine;

/// Orchestrates predict and history reads. The engine slot is filled
/// exactly once when the model finishes loading; history reads work
/// either way.
pub struct PredictionPipeline {
    engine: OnceLock<Arc<InferenceEngine>>,
    store: Arc<dyn IRecordStore>,
}

impl PredictionPipeline {
    pub fn new(store: Arc<dyn IRecordStore>) -> Self {
        Self {
            engine: OnceLock::new(),
            store,
        }
    }

    /// Install the loaded engine. Returns false if one was already set.
    pub fn install_engine(&self, engine: Arc<InferenceEngine>) -> bool {
        self.engine.set(engine).is_ok()
    }

    /// Whether the model has finished loading.
    pub fn is_ready(&self) -> bool {
        self.engine.get().is_some()
    }

    /// Score the upload, build the record, persist it, return it.
    /// Any failure aborts the request; nothing is partially committed.
    pub async fn predict(&self, image_bytes: Vec<u8>) -> DermaResult<PredictionRecord> {
        let engine = self
            .engine
            .get()
            .cloned()
            .ok_or(InferenceError::ModelNotReady)?;
        let store = Arc::clone(&self.store);

        // Decode + inference + the store write are blocking work.
        let record = tokio::task::spawn_blocking(move || {
            let score = engine.score(&image_bytes)?;
            let record = PredictionRecord::from_score(score);
            store.put(&record)?;
            Ok::<_, DermaError>(record)
        })
        .await
        .map_err(|e| InferenceError::InferenceFailed {
            reason: format!("prediction task failed: {e}"),
        })??;

        info!(
            id = %record.id,
            result = %record.result,
            score = %record.confidence_score,
            "prediction stored"
        );
        Ok(record)
    }

    /// Full prediction history, oldest first.
    pub async fn histories(&self) -> DermaResult<Vec<PredictionRecord>> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.list_all())
            .await
            .map_err(|e| InferenceError::InferenceFailed {
                reason: format!("history task failed: {e}"),
            })?
    }
}

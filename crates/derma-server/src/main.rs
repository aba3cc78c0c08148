//! Service binary: config, tracing, storage, background model load, serve.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use derma_core::config::ModelConfig;
use derma_core::errors::{DermaResult, InferenceError};
use derma_core::DermaConfig;
use derma_inference::{fetch, InferenceEngine, OnnxClassifier};
use derma_server::{build_router, AppState, PredictionPipeline};
use derma_storage::StorageEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DermaConfig::load().context("loading configuration")?;

    let store = Arc::new(
        StorageEngine::open(Path::new(&config.storage.db_path)).context("opening record store")?,
    );
    let pipeline = Arc::new(PredictionPipeline::new(store));
    let state = AppState::new(Arc::clone(&pipeline), config.upload.max_image_bytes);

    // Load the model in the background. Requests arriving before it
    // finishes get a graceful not-ready response; a load failure keeps
    // the service in that state rather than killing the process.
    let model_config = config.model.clone();
    tokio::spawn(async move {
        match load_model(&model_config).await {
            Ok(engine) => {
                let name = engine.classifier_name().to_string();
                if pipeline.install_engine(engine) {
                    info!(model = %name, "model loaded successfully");
                }
            }
            Err(err) => {
                error!(error = %err, "model load failed; service stays not-ready");
            }
        }
    });

    let app = build_router(state);
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(
        %addr,
        version = derma_core::constants::VERSION,
        "server running"
    );
    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}

/// Fetch the model artifact and load it into an inference engine.
async fn load_model(config: &ModelConfig) -> DermaResult<Arc<InferenceEngine>> {
    let path = fetch::ensure_model(&config.source_url, &config.cache_path).await?;
    let path_str = path.to_string_lossy().into_owned();

    let classifier = tokio::task::spawn_blocking(move || OnnxClassifier::load(&path_str))
        .await
        .map_err(|e| InferenceError::ModelLoadFailed {
            path: config.cache_path.clone(),
            reason: format!("load task failed: {e}"),
        })??;

    Ok(Arc::new(InferenceEngine::new(
        Arc::new(classifier),
        config.input_size,
    )))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

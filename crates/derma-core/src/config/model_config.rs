use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MODEL_INPUT_SIZE;

/// Model artifact source and input geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Remote URL the serialized model is fetched from at startup.
    pub source_url: String,
    /// Local path the fetched artifact is cached at.
    pub cache_path: String,
    /// Side length of the square model input.
    pub input_size: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            source_url: defaults::DEFAULT_MODEL_URL.to_string(),
            cache_path: defaults::DEFAULT_MODEL_CACHE_PATH.to_string(),
            input_size: MODEL_INPUT_SIZE,
        }
    }
}

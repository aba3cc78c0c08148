//! Service configuration: TOML file over defaults.

pub mod defaults;
pub mod model_config;
pub mod server_config;
pub mod storage_config;
pub mod upload_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DermaError, DermaResult};

pub use model_config::ModelConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;
pub use upload_config::UploadConfig;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "DERMA_CONFIG";

/// Root configuration for the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DermaConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
}

impl DermaConfig {
    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> DermaResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DermaError::ConfigError(format!("read {}: {e}", path.display()))
        })?;
        toml::from_str(&raw)
            .map_err(|e| DermaError::ConfigError(format!("parse {}: {e}", path.display())))
    }

    /// Load from the path named by `DERMA_CONFIG`, or fall back to defaults.
    pub fn load() -> DermaResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = DermaConfig::default();
        assert_eq!(config.server.port, defaults::DEFAULT_PORT);
        assert_eq!(config.upload.max_image_bytes, crate::constants::MAX_IMAGE_BYTES);
        assert_eq!(config.model.input_size, crate::constants::MODEL_INPUT_SIZE);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let config: DermaConfig = toml::from_str("[server]\nport = 9090\n").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, defaults::DEFAULT_HOST);
        assert_eq!(config.storage.db_path, defaults::DEFAULT_DB_PATH);
    }
}

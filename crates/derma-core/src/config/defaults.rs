//! Default configuration values.

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_MODEL_URL: &str =
    "https://storage.googleapis.com/derma-models/derma_lesion.onnx";
pub const DEFAULT_MODEL_CACHE_PATH: &str = "model/derma_lesion.onnx";

pub const DEFAULT_DB_PATH: &str = "derma.db";

/// Derma service version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Side length of the square input tensor the model expects.
pub const MODEL_INPUT_SIZE: u32 = 150;

/// Decision boundary converting a confidence score into a binary label.
/// A score strictly greater than this is positive.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Maximum accepted size of an uploaded image file, in bytes.
pub const MAX_IMAGE_BYTES: usize = 1_000_000;

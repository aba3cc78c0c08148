//! # derma-core
//!
//! Foundation crate for the Derma prediction service.
//! Defines config, constants, errors, models, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DermaConfig;
pub use errors::{DermaError, DermaResult};
pub use models::{ImageTensor, PredictionLabel, PredictionRecord};

//! # derma-server
//!
//! HTTP surface of the prediction service: multipart upload handling, the
//! prediction pipeline, history listing, and the response envelope.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod routes;
pub mod state;

pub use pipeline::PredictionPipeline;
pub use routes::build_router;
pub use state::AppState;

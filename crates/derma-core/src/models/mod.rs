pub mod image_tensor;
pub mod prediction_record;

pub use image_tensor::ImageTensor;
pub use prediction_record::{PredictionLabel, PredictionRecord};

// Core domain exports
pub mod descriptions;
pub mod encoder;
pub mod features;
pub mod holland;
pub mod model;
pub mod predictor;

pub use descriptions::{DescriptionTable, FALLBACK_DESCRIPTION};
pub use encoder::{CategoryEncoder, EncoderError};
pub use features::{FeatureRow, FieldError};
pub use holland::{HollandCategory, HollandScores};
pub use model::{ForestModel, ForestParams, ModelError};
pub use predictor::{PredictError, Predictor};

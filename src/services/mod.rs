// Service exports
pub mod context;
pub mod dataset;
pub mod model_store;
pub mod views;

pub use context::{AppContext, StartupError};
pub use dataset::{DatasetError, ReferenceDataset};
pub use model_store::{load_model, save_model, train_model, ModelStoreError};
pub use views::{ViewError, Views};

//! Career Compass - career recommendation and RIASEC personality quiz service
//!
//! A trained classifier maps a student's interest ratings to a course, and a
//! short Holland questionnaire maps answers to a personality type. Both flows
//! redirect to a shared results page that describes the outcome.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CategoryEncoder, FeatureRow, ForestModel, HollandCategory, HollandScores, Predictor};
pub use crate::routes::{configure_routes, AppState};
pub use crate::services::{AppContext, ReferenceDataset, StartupError};

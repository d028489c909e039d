use crate::core::features::FeatureRow;
use thiserror::Error;

/// Errors raised while running inference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("model expects {expected} features, row has {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    #[error("model produced no prediction")]
    Empty,

    #[error("model failure: {0}")]
    Backend(String),
}

/// Classification capability consumed by the recommender.
///
/// Returns one class code per input row. Implementations are shared
/// read-only across workers.
pub trait Predictor: Send + Sync {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<i64>, PredictError>;

    /// Number of features each row must carry
    fn n_features(&self) -> usize;

    /// Class codes the model can emit
    fn classes(&self) -> &[i64];

    /// Predict a single row, taking the first returned code
    fn predict_one(&self, row: &FeatureRow) -> Result<i64, PredictError> {
        self.predict(std::slice::from_ref(row))?
            .first()
            .copied()
            .ok_or(PredictError::Empty)
    }
}

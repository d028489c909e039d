use crate::core::features::FeatureRow;
use crate::core::predictor::{PredictError, Predictor};
use aprender::primitives::Matrix;
use aprender::tree::RandomForestClassifier;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use thiserror::Error;

/// Errors raised while fitting, saving or restoring a forest
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Training data is empty")]
    NoSamples,

    #[error("Training data has {samples} values, expected {rows} rows of {n_features}")]
    Shape {
        samples: usize,
        rows: usize,
        n_features: usize,
    },

    #[error("Forest needs at least one estimator")]
    NoEstimators,

    #[error("Forest training failed: {0}")]
    Fit(#[from] aprender::AprenderError),

    #[error("Forest serialization failed: {0}")]
    Serialization(String),
}

/// Hyperparameters used when a forest is fitted at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    pub random_state: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: Some(10),
            random_state: 42,
        }
    }
}

/// Random forest classifier bound to the width and label range of the
/// dataset it serves.
///
/// The persisted safetensors file carries only the trees, so the feature
/// count and class codes are supplied by the caller on load.
#[derive(Debug, Clone)]
pub struct ForestModel {
    forest: RandomForestClassifier,
    n_features: usize,
    classes: Vec<i64>,
}

impl ForestModel {
    /// Fit a forest on row-major `samples` with one label code per row
    pub fn fit(
        samples: &[f32],
        targets: &[usize],
        n_features: usize,
        n_classes: usize,
        params: &ForestParams,
    ) -> Result<Self, ModelError> {
        if targets.is_empty() || n_features == 0 {
            return Err(ModelError::NoSamples);
        }
        if params.n_estimators == 0 {
            return Err(ModelError::NoEstimators);
        }
        if samples.len() != targets.len() * n_features {
            return Err(ModelError::Shape {
                samples: samples.len(),
                rows: targets.len(),
                n_features,
            });
        }

        let x = Matrix::from_vec(targets.len(), n_features, samples.to_vec()).map_err(|_| {
            ModelError::Shape {
                samples: samples.len(),
                rows: targets.len(),
                n_features,
            }
        })?;

        let mut forest = RandomForestClassifier::new(params.n_estimators)
            .with_random_state(params.random_state);
        if let Some(depth) = params.max_depth {
            forest = forest.with_max_depth(depth);
        }
        forest.fit(&x, targets)?;

        Ok(Self::from_forest(forest, n_features, n_classes))
    }

    /// Wrap an already fitted forest
    pub fn from_forest(forest: RandomForestClassifier, n_features: usize, n_classes: usize) -> Self {
        Self {
            forest,
            n_features,
            classes: (0..n_classes as i64).collect(),
        }
    }

    pub fn load<P: AsRef<Path>>(
        path: P,
        n_features: usize,
        n_classes: usize,
    ) -> Result<Self, ModelError> {
        let forest =
            RandomForestClassifier::load_safetensors(path).map_err(ModelError::Serialization)?;
        Ok(Self::from_forest(forest, n_features, n_classes))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        self.forest
            .save_safetensors(path)
            .map_err(ModelError::Serialization)
    }

    fn to_matrix(&self, rows: &[FeatureRow]) -> Result<Matrix<f32>, PredictError> {
        let mut data = Vec::with_capacity(rows.len() * self.n_features);
        for row in rows {
            if row.len() != self.n_features {
                return Err(PredictError::WidthMismatch {
                    expected: self.n_features,
                    actual: row.len(),
                });
            }
            data.extend(row.values().iter().map(|v| *v as f32));
        }
        Matrix::from_vec(rows.len(), self.n_features, data)
            .map_err(|e| PredictError::Backend(e.to_string()))
    }
}

impl Predictor for ForestModel {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<i64>, PredictError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let x = self.to_matrix(rows)?;

        // A restored tree indexing past the row width panics inside aprender.
        let codes = panic::catch_unwind(AssertUnwindSafe(|| self.forest.predict(&x)))
            .map_err(|_| PredictError::Backend("forest rejected the input row".to_string()))?;

        Ok(codes.into_iter().map(|code| code as i64).collect())
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[i64]) -> FeatureRow {
        let columns: Vec<String> = (0..values.len()).map(|i| format!("f{}", i)).collect();
        let form = columns
            .iter()
            .zip(values)
            .map(|(c, v)| (c.as_str(), *v))
            .collect();
        FeatureRow::aligned(&columns, &form)
    }

    /// Ten rows per class, split cleanly on the first feature
    fn separable() -> (Vec<f32>, Vec<usize>) {
        let mut samples = Vec::new();
        let mut targets = Vec::new();
        for i in 0..20 {
            let class = i % 2;
            samples.extend([class as f32, 0.0]);
            targets.push(class);
        }
        (samples, targets)
    }

    fn params(n_estimators: usize) -> ForestParams {
        ForestParams {
            n_estimators,
            max_depth: Some(4),
            random_state: 7,
        }
    }

    #[test]
    fn test_fit_separates_classes() {
        let (samples, targets) = separable();
        let model = ForestModel::fit(&samples, &targets, 2, 2, &params(15)).unwrap();

        assert_eq!(model.n_features(), 2);
        assert_eq!(model.classes(), &[0, 1]);
        assert_eq!(model.predict_one(&row(&[1, 0])).unwrap(), 1);
        assert_eq!(model.predict_one(&row(&[0, 0])).unwrap(), 0);
    }

    #[test]
    fn test_single_class_always_predicted() {
        let samples = vec![0.0, 1.0, 1.0, 0.0, 1.0, 1.0];
        let model = ForestModel::fit(&samples, &[3, 3, 3], 2, 4, &params(5)).unwrap();
        for values in [[0, 0], [5, 9], [1, 1]] {
            assert_eq!(model.predict_one(&row(&values)).unwrap(), 3);
        }
    }

    #[test]
    fn test_width_mismatch_is_error() {
        let (samples, targets) = separable();
        let model = ForestModel::fit(&samples, &targets, 2, 2, &params(3)).unwrap();
        assert_eq!(
            model.predict(&[row(&[1, 0, 0])]).unwrap_err(),
            PredictError::WidthMismatch { expected: 2, actual: 3 }
        );
    }

    #[test]
    fn test_fit_rejects_bad_shapes() {
        assert!(matches!(
            ForestModel::fit(&[], &[], 2, 2, &params(3)),
            Err(ModelError::NoSamples)
        ));
        assert!(matches!(
            ForestModel::fit(&[1.0, 2.0, 3.0], &[0, 1], 2, 2, &params(3)),
            Err(ModelError::Shape { samples: 3, rows: 2, n_features: 2 })
        ));
        assert!(matches!(
            ForestModel::fit(&[1.0, 2.0], &[0], 2, 1, &params(0)),
            Err(ModelError::NoEstimators)
        ));
    }

    #[test]
    fn test_save_and_load_keep_predictions() {
        let (samples, targets) = separable();
        let model = ForestModel::fit(&samples, &targets, 2, 2, &params(9)).unwrap();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("forest.safetensors");

        model.save(&path).unwrap();
        let restored = ForestModel::load(&path, 2, 2).unwrap();

        for values in [[0, 0], [1, 0]] {
            assert_eq!(
                restored.predict_one(&row(&values)).unwrap(),
                model.predict_one(&row(&values)).unwrap()
            );
        }
    }

    #[test]
    fn test_load_garbage_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("forest.safetensors");
        std::fs::write(&path, b"not a forest").expect("write");
        assert!(matches!(
            ForestModel::load(&path, 2, 2),
            Err(ModelError::Serialization(_))
        ));
    }
}

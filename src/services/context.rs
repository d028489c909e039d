use crate::config::{DataSettings, ModelSettings};
use crate::core::{CategoryEncoder, DescriptionTable, Predictor};
use crate::services::dataset::{DatasetError, ReferenceDataset};
use crate::services::model_store::{load_model, ModelStoreError};
use crate::services::views::{ViewError, Views};
use std::sync::Arc;
use thiserror::Error;

/// Failures that prevent the service from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Model(#[from] ModelStoreError),

    #[error(transparent)]
    Views(#[from] ViewError),

    #[error("Model expects {model} features but the dataset has {dataset}")]
    FeatureWidth { model: usize, dataset: usize },
}

/// Everything built once at startup and shared read-only by every request
pub struct AppContext {
    pub dataset: ReferenceDataset,
    pub predictor: Arc<dyn Predictor>,
    pub descriptions: DescriptionTable,
    pub views: Views,
}

impl AppContext {
    /// Load the reference dataset and the forest artifact
    pub fn load(data: &DataSettings, model: &ModelSettings) -> Result<Self, StartupError> {
        let dataset = ReferenceDataset::load(&data.dataset_path, &data.label_column)?;
        tracing::info!(
            "Reference dataset loaded from {} ({} rows, {} features)",
            data.dataset_path.display(),
            dataset.n_rows(),
            dataset.feature_names().len()
        );

        let forest = load_model(&model.path, &dataset)?;
        tracing::info!("Model loaded from {}", model.path.display());

        Self::new(dataset, Arc::new(forest))
    }

    /// Assemble a context around any predictor
    pub fn new(
        dataset: ReferenceDataset,
        predictor: Arc<dyn Predictor>,
    ) -> Result<Self, StartupError> {
        let width = dataset.feature_names().len();
        if predictor.n_features() != width {
            return Err(StartupError::FeatureWidth {
                model: predictor.n_features(),
                dataset: width,
            });
        }

        let labels = dataset.label_encoder();
        let unknown: Vec<i64> = predictor
            .classes()
            .iter()
            .copied()
            .filter(|code| !labels.contains_code(*code))
            .collect();
        if !unknown.is_empty() {
            tracing::warn!(
                "Model classes {:?} are outside the {} label range 0..{}",
                unknown,
                labels.column(),
                labels.len()
            );
        }

        let descriptions = DescriptionTable::new();
        let undescribed: Vec<&str> = labels
            .classes()
            .iter()
            .map(String::as_str)
            .filter(|label| !descriptions.contains(label))
            .collect();
        if !undescribed.is_empty() {
            tracing::warn!(
                "No description for careers {:?}; the fallback text is shown for them",
                undescribed
            );
        }

        Ok(Self {
            dataset,
            predictor,
            descriptions,
            views: Views::new()?,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        self.dataset.feature_names()
    }

    pub fn label_encoder(&self) -> &CategoryEncoder {
        self.dataset.label_encoder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeatureRow, PredictError};
    use crate::services::model_store::{save_model, train_model};

    struct Fixed {
        width: usize,
        classes: Vec<i64>,
    }

    impl Predictor for Fixed {
        fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<i64>, PredictError> {
            Ok(rows.iter().map(|_| self.classes[0]).collect())
        }
        fn n_features(&self) -> usize {
            self.width
        }
        fn classes(&self) -> &[i64] {
            &self.classes
        }
    }

    fn dataset() -> ReferenceDataset {
        ReferenceDataset::from_reader("a,b,Courses\n1,0,MBBS\n0,1,B.Ed.\n".as_bytes(), "Courses")
            .unwrap()
    }

    #[test]
    fn test_width_mismatch_fails_startup() {
        let predictor = Arc::new(Fixed { width: 3, classes: vec![0] });
        let err = AppContext::new(dataset(), predictor).err().unwrap();
        assert!(matches!(err, StartupError::FeatureWidth { model: 3, dataset: 2 }));
    }

    #[test]
    fn test_unknown_classes_still_start() {
        let predictor = Arc::new(Fixed { width: 2, classes: vec![0, 5] });
        let ctx = AppContext::new(dataset(), predictor).unwrap();
        assert_eq!(ctx.feature_names(), &["a", "b"]);
    }

    #[test]
    fn test_undescribed_career_still_starts() {
        let dataset =
            ReferenceDataset::from_reader("a,Courses\n1,Basket Weaving\n".as_bytes(), "Courses")
                .unwrap();
        let predictor = Arc::new(Fixed { width: 1, classes: vec![0] });
        let ctx = AppContext::new(dataset, predictor).unwrap();
        assert!(!ctx.descriptions.contains("Basket Weaving"));
    }

    fn write_dataset(dir: &tempfile::TempDir) -> DataSettings {
        let path = dir.path().join("stud.csv");
        std::fs::write(&path, "a,b,Courses\n1,0,MBBS\n0,1,B.Ed.\n").expect("write");
        DataSettings {
            dataset_path: path,
            label_column: "Courses".to_string(),
        }
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let data = write_dataset(&dir);
        let model = ModelSettings {
            path: dir.path().join("forest.safetensors"),
            n_estimators: 3,
            ..ModelSettings::default()
        };
        let dataset = ReferenceDataset::load(&data.dataset_path, "Courses").unwrap();
        let forest = train_model(&model, &dataset).unwrap();
        save_model(&forest, &model.path).unwrap();

        let ctx = AppContext::load(&data, &model).unwrap();
        assert_eq!(ctx.label_encoder().len(), 2);
        assert_eq!(ctx.predictor.n_features(), 2);
    }

    #[test]
    fn test_missing_model_fails_startup() {
        let dir = tempfile::tempdir().expect("temp dir");
        let data = write_dataset(&dir);
        let model = ModelSettings {
            path: dir.path().join("absent.safetensors"),
            ..ModelSettings::default()
        };
        assert!(matches!(
            AppContext::load(&data, &model),
            Err(StartupError::Model(ModelStoreError::Missing { .. }))
        ));
    }

    #[test]
    fn test_missing_dataset_fails_startup() {
        let data = DataSettings {
            dataset_path: "/nonexistent/stud.csv".into(),
            ..DataSettings::default()
        };
        assert!(matches!(
            AppContext::load(&data, &ModelSettings::default()),
            Err(StartupError::Dataset(_))
        ));
    }
}

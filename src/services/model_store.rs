use crate::config::ModelSettings;
use crate::core::{ForestModel, ModelError};
use crate::services::dataset::ReferenceDataset;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while restoring or producing the forest artifact
#[derive(Debug, Error)]
pub enum ModelStoreError {
    #[error("Model artifact {path} does not exist (produce it with career-compass-train)")]
    Missing { path: String },

    #[error("Model artifact {path} rejected: {source}")]
    Invalid {
        path: String,
        #[source]
        source: ModelError,
    },

    #[error("Failed to fit forest on the reference dataset: {0}")]
    Fit(#[source] ModelError),

    #[error("Failed to write model artifact {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: ModelError,
    },
}

/// Restore the forest saved at `path`, sized to the dataset it serves
pub fn load_model<P: AsRef<Path>>(
    path: P,
    dataset: &ReferenceDataset,
) -> Result<ForestModel, ModelStoreError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    if !path.is_file() {
        return Err(ModelStoreError::Missing { path: shown });
    }

    let model = ForestModel::load(
        path,
        dataset.feature_names().len(),
        dataset.label_encoder().len(),
    )
    .map_err(|source| ModelStoreError::Invalid {
        path: shown.clone(),
        source,
    })?;

    tracing::debug!("Forest restored from {}", shown);
    Ok(model)
}

/// Fit a forest on every row of `dataset` with the configured hyperparameters
pub fn train_model(
    settings: &ModelSettings,
    dataset: &ReferenceDataset,
) -> Result<ForestModel, ModelStoreError> {
    let params = settings.forest_params();
    tracing::info!(
        "Fitting {} trees on {} rows",
        params.n_estimators,
        dataset.n_rows()
    );
    ForestModel::fit(
        dataset.samples(),
        dataset.targets(),
        dataset.feature_names().len(),
        dataset.label_encoder().len(),
        &params,
    )
    .map_err(ModelStoreError::Fit)
}

/// Write `model` to `path`, creating missing parent directories
pub fn save_model<P: AsRef<Path>>(model: &ForestModel, path: P) -> Result<(), ModelStoreError> {
    let path = path.as_ref();
    let write_error = |source| ModelStoreError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_error(ModelError::Serialization(e.to_string())))?;
    }
    model.save(path).map_err(write_error)?;

    tracing::info!("Forest saved to {}", path.display());
    Ok(())
}

use crate::core::CategoryEncoder;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the reference dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed dataset at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset needs at least one feature column and a label column, found {0} columns")]
    TooFewColumns(usize),

    #[error("Dataset has no rows")]
    Empty,

    #[error("Label column '{expected}' must be the last column, found '{found}'")]
    LabelNotLast { expected: String, found: String },

    #[error("Label column '{0}' holds only numbers and cannot be decoded to a career")]
    LabelNotCategorical(String),

    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),
}

/// Historical rows the model is trained on.
///
/// Besides the column layout and fitted category encoders, the feature
/// cells are kept as a row-major `f32` matrix with one label code per row
/// so a forest can be fitted when no artifact exists.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    columns: Vec<String>,
    label_column: String,
    n_rows: usize,
    encoders: HashMap<String, CategoryEncoder>,
    samples: Vec<f32>,
    targets: Vec<usize>,
}

impl ReferenceDataset {
    /// Load a CSV file whose last column is `label_column`
    pub fn load<P: AsRef<Path>>(path: P, label_column: &str) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv(reader, label_column)
    }

    /// Load from any CSV source with a header row
    pub fn from_reader<R: io::Read>(reader: R, label_column: &str) -> Result<Self, DatasetError> {
        Self::from_csv(csv::Reader::from_reader(reader), label_column)
    }

    fn from_csv<R: io::Read>(
        mut reader: csv::Reader<R>,
        label_column: &str,
    ) -> Result<Self, DatasetError> {
        let columns: Vec<String> = reader
            .headers()
            .map_err(|source| DatasetError::Csv { line: 1, source })?
            .iter()
            .map(str::to_string)
            .collect();

        if columns.len() < 2 {
            return Err(DatasetError::TooFewColumns(columns.len()));
        }
        for (idx, name) in columns.iter().enumerate() {
            if columns[..idx].contains(name) {
                return Err(DatasetError::DuplicateColumn(name.clone()));
            }
        }
        let last = &columns[columns.len() - 1];
        if last != label_column {
            return Err(DatasetError::LabelNotLast {
                expected: label_column.to_string(),
                found: last.clone(),
            });
        }

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); columns.len()];
        let mut n_rows = 0;
        for result in reader.records() {
            let record = result.map_err(|source| DatasetError::Csv {
                line: source.position().map(|p| p.line()).unwrap_or(0),
                source,
            })?;
            for (column, value) in cells.iter_mut().zip(record.iter()) {
                column.push(value.to_string());
            }
            n_rows += 1;
        }

        if n_rows == 0 {
            return Err(DatasetError::Empty);
        }

        let encoders: HashMap<String, CategoryEncoder> = columns
            .iter()
            .zip(&cells)
            .filter(|(_, column)| !is_numeric_column(column))
            .map(|(name, column)| (name.clone(), CategoryEncoder::fit(name.clone(), column)))
            .collect();

        let Some(labels) = encoders.get(label_column) else {
            return Err(DatasetError::LabelNotCategorical(label_column.to_string()));
        };

        let n_features = columns.len() - 1;
        let mut samples = Vec::with_capacity(n_rows * n_features);
        for row in 0..n_rows {
            for (name, column) in columns[..n_features].iter().zip(&cells) {
                samples.push(cell_value(encoders.get(name), &column[row]));
            }
        }
        let targets = cells[n_features]
            .iter()
            .map(|label| labels.encode(label).map(|code| code as usize))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DatasetError::LabelNotCategorical(label_column.to_string()))?;

        tracing::debug!(
            "Dataset loaded: {} rows, {} columns, {} categorical",
            n_rows,
            columns.len(),
            encoders.len()
        );

        Ok(Self {
            columns,
            label_column: label_column.to_string(),
            n_rows,
            encoders,
            samples,
            targets,
        })
    }

    /// Every column except the trailing label column, in file order
    pub fn feature_names(&self) -> &[String] {
        &self.columns[..self.columns.len() - 1]
    }

    pub fn label_column(&self) -> &str {
        &self.label_column
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn encoder(&self, column: &str) -> Option<&CategoryEncoder> {
        self.encoders.get(column)
    }

    /// Encoder of the label column; present by construction
    pub fn label_encoder(&self) -> &CategoryEncoder {
        &self.encoders[&self.label_column]
    }

    /// Feature cells, row-major, `n_rows * feature_names().len()` values
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Label code of every row
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }
}

// Text feature cells become their encoder code; blank numeric cells are 0.
fn cell_value(encoder: Option<&CategoryEncoder>, cell: &str) -> f32 {
    match encoder {
        Some(encoder) => encoder.encode(cell).map(|code| code as f32).unwrap_or(0.0),
        None => cell.trim().parse::<f32>().unwrap_or(0.0),
    }
}

// Blank cells are missing numbers, not text.
fn is_numeric_column(values: &[String]) -> bool {
    values.iter().all(|v| {
        let v = v.trim();
        v.is_empty() || v.parse::<i64>().is_ok() || v.parse::<f64>().is_ok()
    })
}

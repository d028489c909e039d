use std::collections::HashMap;
use thiserror::Error;

/// A submitted form value that could not be read as an integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' must be an integer, got '{value}'")]
pub struct FieldError {
    pub field: String,
    pub value: String,
}

/// One model input row: every dataset feature column, in dataset order,
/// paired with an integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<i64>,
}

impl FeatureRow {
    /// Build a row by reading each feature from the submitted form.
    ///
    /// Absent fields become 0. Present fields are trimmed and must parse as
    /// an integer.
    pub fn from_form(
        feature_names: &[String],
        form: &HashMap<String, String>,
    ) -> Result<Self, FieldError> {
        let mut submitted = HashMap::with_capacity(feature_names.len());
        for name in feature_names {
            submitted.insert(name.as_str(), read_int_field(form, name)?);
        }

        Ok(Self::aligned(feature_names, &submitted))
    }

    /// Lay out `submitted` in the order of `feature_names`, filling any
    /// missing feature with 0 and dropping names that are not features.
    pub fn aligned(feature_names: &[String], submitted: &HashMap<&str, i64>) -> Self {
        let values = feature_names
            .iter()
            .map(|name| submitted.get(name.as_str()).copied().unwrap_or(0))
            .collect();

        Self {
            columns: feature_names.to_vec(),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<i64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx])
    }
}

/// Read a form field as an integer; absent fields read as 0
pub fn read_int_field(form: &HashMap<String, String>, field: &str) -> Result<i64, FieldError> {
    match form.get(field) {
        None => Ok(0),
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| FieldError {
            field: field.to_string(),
            value: raw.clone(),
        }),
    }
}

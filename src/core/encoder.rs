use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Errors raised when translating between labels and codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderError {
    #[error("class code {code} is outside the fitted range 0..{classes} of column '{column}'")]
    UnknownCode {
        column: String,
        code: i64,
        classes: usize,
    },

    #[error("label '{label}' was not seen when fitting column '{column}'")]
    UnknownLabel { column: String, label: String },
}

/// Bijection between the distinct string values of a dataset column and
/// dense integer codes `0..k-1`.
///
/// Classes are kept in ascending order, so the code of a label is its rank
/// among all distinct values observed during fitting.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    column: String,
    classes: Vec<String>,
    codes: HashMap<String, i64>,
}

impl CategoryEncoder {
    /// Fit an encoder from the observed values of `column`
    pub fn fit<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code as i64))
            .collect();

        Self {
            column: column.into(),
            classes,
            codes,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Fitted labels, ordered by code
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains_code(&self, code: i64) -> bool {
        code >= 0 && (code as usize) < self.classes.len()
    }

    pub fn encode(&self, label: &str) -> Result<i64, EncoderError> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| EncoderError::UnknownLabel {
                column: self.column.clone(),
                label: label.to_string(),
            })
    }

    pub fn decode(&self, code: i64) -> Result<&str, EncoderError> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| self.classes.get(idx))
            .map(String::as_str)
            .ok_or_else(|| EncoderError::UnknownCode {
                column: self.column.clone(),
                code,
                classes: self.classes.len(),
            })
    }
}

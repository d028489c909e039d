use serde::{Deserialize, Serialize};

/// Query string of the results page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub result: Option<String>,
}

impl ResultsQuery {
    /// Build from raw query pairs; when `result` repeats, the first one wins
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            result: pairs
                .into_iter()
                .find(|(key, _)| key == "result")
                .map(|(_, value)| value),
        }
    }

    /// Label to display; `"No result"` when the parameter is absent
    pub fn label(&self) -> &str {
        self.result.as_deref().unwrap_or(NO_RESULT)
    }
}

pub const NO_RESULT: &str = "No result";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_result_defaults() {
        assert_eq!(ResultsQuery::default().label(), "No result");
    }

    #[test]
    fn test_first_result_wins() {
        let pairs = vec![
            ("other".to_string(), "1".to_string()),
            ("result".to_string(), "MBBS".to_string()),
            ("result".to_string(), "X".to_string()),
        ];
        assert_eq!(ResultsQuery::from_pairs(pairs).label(), "MBBS");
        assert_eq!(ResultsQuery::from_pairs(Vec::new()).label(), NO_RESULT);
    }

    #[test]
    fn test_empty_result_is_kept() {
        let query = ResultsQuery { result: Some(String::new()) };
        assert_eq!(query.label(), "");
    }
}

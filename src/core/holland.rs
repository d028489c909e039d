use crate::core::features::{read_int_field, FieldError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Holland RIASEC personality category, declared in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HollandCategory {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl HollandCategory {
    /// All categories in tie-break order
    pub const ALL: [HollandCategory; 6] = [
        HollandCategory::Realistic,
        HollandCategory::Investigative,
        HollandCategory::Artistic,
        HollandCategory::Social,
        HollandCategory::Enterprising,
        HollandCategory::Conventional,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            HollandCategory::Realistic => "R",
            HollandCategory::Investigative => "I",
            HollandCategory::Artistic => "A",
            HollandCategory::Social => "S",
            HollandCategory::Enterprising => "E",
            HollandCategory::Conventional => "C",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HollandCategory::Realistic => "Realistic",
            HollandCategory::Investigative => "Investigative",
            HollandCategory::Artistic => "Artistic",
            HollandCategory::Social => "Social",
            HollandCategory::Enterprising => "Enterprising",
            HollandCategory::Conventional => "Conventional",
        }
    }

    /// The two quiz statements for this category
    pub fn statements(self) -> [&'static str; 2] {
        match self {
            HollandCategory::Realistic => [
                "I enjoy working with machines and tools.",
                "I like practical tasks over abstract ones.",
            ],
            HollandCategory::Investigative => [
                "I enjoy solving puzzles and brain teasers.",
                "I like conducting experiments.",
            ],
            HollandCategory::Artistic => [
                "I enjoy drawing, painting, or creating visual art.",
                "I like writing poetry or stories.",
            ],
            HollandCategory::Social => [
                "I enjoy helping people solve their problems.",
                "I enjoy teaching and educating others.",
            ],
            HollandCategory::Enterprising => [
                "I enjoy leadership roles and responsibilities.",
                "I like persuading others.",
            ],
            HollandCategory::Conventional => [
                "I prefer working with numbers and data.",
                "I enjoy record-keeping and organizing.",
            ],
        }
    }

    /// Form field name for the statement at `index`, e.g. `R_0`
    pub fn field_name(self, index: usize) -> String {
        format!("{}_{}", self.symbol(), index)
    }
}

impl fmt::Display for HollandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One rendered quiz question
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub field: String,
    pub statement: &'static str,
}

/// Questions grouped by category, for the quiz view
#[derive(Debug, Clone, Serialize)]
pub struct QuizSection {
    pub symbol: &'static str,
    pub name: &'static str,
    pub questions: Vec<QuizQuestion>,
}

pub fn quiz_sections() -> Vec<QuizSection> {
    HollandCategory::ALL
        .into_iter()
        .map(|category| QuizSection {
            symbol: category.symbol(),
            name: category.name(),
            questions: category
                .statements()
                .into_iter()
                .enumerate()
                .map(|(idx, statement)| QuizQuestion {
                    field: category.field_name(idx),
                    statement,
                })
                .collect(),
        })
        .collect()
}

/// Summed answers per RIASEC category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HollandScores {
    scores: [u64; 6],
}

impl HollandScores {
    /// Tally the submitted quiz answers. Missing answers count as 0; negative
    /// or non-integer answers are rejected.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, FieldError> {
        let mut scores = Self::default();
        for (slot, category) in HollandCategory::ALL.into_iter().enumerate() {
            for idx in 0..category.statements().len() {
                let field = category.field_name(idx);
                let answer = read_int_field(form, &field)?;
                let answer = u64::try_from(answer).map_err(|_| FieldError {
                    field: field.clone(),
                    value: answer.to_string(),
                })?;
                scores.scores[slot] = scores.scores[slot].saturating_add(answer);
            }
        }
        Ok(scores)
    }

    pub fn from_scores(scores: [u64; 6]) -> Self {
        Self { scores }
    }

    pub fn score(&self, category: HollandCategory) -> u64 {
        self.scores[category as usize]
    }

    /// Category with the highest score; ties go to the earliest category in
    /// R, I, A, S, E, C order.
    pub fn dominant(&self) -> HollandCategory {
        let mut best = 0;
        for slot in 1..self.scores.len() {
            if self.scores[slot] > self.scores[best] {
                best = slot;
            }
        }
        HollandCategory::ALL[best]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_quiz_has_twelve_questions() {
        let sections = quiz_sections();
        assert_eq!(sections.len(), 6);
        let fields: Vec<_> = sections
            .iter()
            .flat_map(|s| s.questions.iter().map(|q| q.field.as_str()))
            .collect();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], "R_0");
        assert_eq!(fields[11], "C_1");
    }

    #[test]
    fn test_scores_sum_per_category() {
        let scores = HollandScores::from_form(&form(&[("S_0", "4"), ("S_1", "3"), ("E_0", "5")])).unwrap();
        assert_eq!(scores.score(HollandCategory::Social), 7);
        assert_eq!(scores.score(HollandCategory::Enterprising), 5);
        assert_eq!(scores.score(HollandCategory::Realistic), 0);
        assert_eq!(scores.dominant(), HollandCategory::Social);
    }

    #[test]
    fn test_tie_prefers_earlier_category() {
        let scores = HollandScores::from_scores([0, 0, 6, 0, 6, 6]);
        assert_eq!(scores.dominant(), HollandCategory::Artistic);

        let all_zero = HollandScores::default();
        assert_eq!(all_zero.dominant(), HollandCategory::Realistic);
    }

    #[test]
    fn test_negative_answer_rejected() {
        let err = HollandScores::from_form(&form(&[("I_1", "-2")])).unwrap_err();
        assert_eq!(err.field, "I_1");
    }

    #[test]
    fn test_symbols_follow_tie_break_order() {
        let symbols: String = HollandCategory::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(symbols, "RIASEC");
        assert_eq!(HollandCategory::Social.name(), "Social");
    }
}

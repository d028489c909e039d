use crate::core::holland::QuizSection;
use minijinja::{context, Environment};
use thiserror::Error;

/// Errors that can occur while building or rendering views
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("recommender.html", include_str!("../../templates/recommender.html")),
    ("personality.html", include_str!("../../templates/personality.html")),
    ("results.html", include_str!("../../templates/results.html")),
];

/// HTML views compiled into the binary
///
/// Templates ending in `.html` are auto-escaped, so labels and feature names
/// taken from the dataset or the query string render safely.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(*name, *source)?;
        }
        Ok(Self { env })
    }

    pub fn index(&self) -> Result<String, ViewError> {
        self.render("index.html", context! {})
    }

    pub fn recommender(&self, features: &[String]) -> Result<String, ViewError> {
        self.render("recommender.html", context! { features })
    }

    pub fn personality(&self, sections: &[QuizSection]) -> Result<String, ViewError> {
        self.render("personality.html", context! { sections })
    }

    pub fn results(&self, result: &str, description: &str) -> Result<String, ViewError> {
        self.render("results.html", context! { result, description })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, ViewError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

impl std::fmt::Debug for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Views").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::holland::quiz_sections;

    #[test]
    fn test_results_escapes_label() {
        let views = Views::new().unwrap();
        let html = views.results("<script>", "desc").unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_recommender_lists_features() {
        let views = Views::new().unwrap();
        let html = views
            .recommender(&["Drawing".to_string(), "Dancing".to_string()])
            .unwrap();
        assert!(html.contains(r#"name="Drawing""#));
        assert!(html.contains(r#"name="Dancing""#));
    }

    #[test]
    fn test_personality_lists_all_fields() {
        let views = Views::new().unwrap();
        let html = views.personality(&quiz_sections()).unwrap();
        for field in ["R_0", "R_1", "I_0", "A_1", "S_0", "E_1", "C_0", "C_1"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)), "missing {}", field);
        }
    }
}

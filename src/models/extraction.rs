use serde::{Deserialize, Serialize};

/// Structured output expected from the vision model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
}

impl std::fmt::Display for ExtractionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [ingredients: {} chars, steps: {} chars]",
            self.title,
            self.ingredients.chars().count(),
            self.steps.chars().count()
        )
    }
}

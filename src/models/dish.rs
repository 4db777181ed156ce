use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Date format accepted on the command line
pub const DATE_INPUT_FORMAT: &str = "%Y%m%d";
/// Date format sent to Notion
pub const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Dish difficulty, as stored in the `Difficulty` select column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum DishDifficulty {
    Easy,
    Medium,
    Hard,
}

impl DishDifficulty {
    /// Label of the select option
    pub fn label(self) -> &'static str {
        match self {
            DishDifficulty::Easy => "Easy",
            DishDifficulty::Medium => "Medium",
            DishDifficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for DishDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One dish, extracted from one image and written as one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishRecord {
    pub title: String,
    pub difficulty: DishDifficulty,
    pub dish_type: String,
    pub source: String,
    pub origin: Option<String>,
    pub date: Option<NaiveDate>,
    pub ingredients: String,
    pub steps: String,
}

impl DishRecord {
    /// Date as sent to Notion (`YYYY-MM-DD`)
    pub fn formatted_date(&self) -> Option<String> {
        self.date.map(|d| d.format(DATE_OUTPUT_FORMAT).to_string())
    }
}

/// Trims the extracted title and upper-cases its first character.
///
/// The rest of the text is kept as written on the receipt.
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

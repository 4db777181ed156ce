//! Upload request
//!
//! What the user asked for, before validation.

use std::fmt::Display;
use std::path::PathBuf;

use crate::models::DishDifficulty;

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub image_path: PathBuf,
    pub difficulty: DishDifficulty,
    pub dish_type: String,
    pub source: String,
    pub country: Option<String>,
    /// `Some("")` means today
    pub date: Option<String>,
    /// Skip the duplicate check
    pub force: bool,
}

impl Display for UploadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[image {} | {} | {} | source \"{}\"]",
            self.image_path.display(),
            self.difficulty,
            self.dish_type,
            self.source
        )
    }
}

use std::path::PathBuf;

use crate::error::{AppResult, ConfigError};

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_PROJECT_ID: &str = "OPENAI_PROJECT_ID";
pub const OPENAI_API_BASE_URL: &str = "OPENAI_API_BASE_URL";
pub const OPENAI_MODEL_NAME: &str = "OPENAI_MODEL_NAME";
pub const NOTION_API_KEY: &str = "NOTION_API_KEY";
pub const NOTION_DB_ID: &str = "NOTION_DB_ID";
pub const NOTION_API_BASE_URL: &str = "NOTION_API_BASE_URL";
pub const NOTION_VERSION: &str = "NOTION_VERSION";
pub const COOK_LOG_FILE: &str = "COOK_LOG_FILE";

/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM ---
    pub llm_api_key: String,
    pub llm_project_id: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    // --- Notion ---
    pub notion_api_key: String,
    pub notion_db_id: String,
    pub notion_api_base_url: String,
    pub notion_version: String,
    /// Debug log file
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_project_id: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            notion_api_key: String::new(),
            notion_db_id: String::new(),
            notion_api_base_url: "https://api.notion.com/v1".to_string(),
            notion_version: "2022-06-28".to_string(),
            log_file: "cook.log".to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// Call [`load_dotenv`] first to pick up a `.env` file.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::EnvVarNotFound {
                var_name: name.to_string(),
            })
        };

        Ok(Self {
            llm_api_key: required(OPENAI_API_KEY)?,
            llm_project_id: optional(OPENAI_PROJECT_ID),
            llm_api_base_url: optional(OPENAI_API_BASE_URL).unwrap_or(default.llm_api_base_url),
            llm_model_name: optional(OPENAI_MODEL_NAME).unwrap_or(default.llm_model_name),
            notion_api_key: required(NOTION_API_KEY)?,
            notion_db_id: required(NOTION_DB_ID)?,
            notion_api_base_url: optional(NOTION_API_BASE_URL)
                .unwrap_or(default.notion_api_base_url),
            notion_version: optional(NOTION_VERSION).unwrap_or(default.notion_version),
            log_file: optional(COOK_LOG_FILE).unwrap_or(default.log_file),
        })
    }
}

/// Loads `.env` into the process environment if the file exists.
///
/// Runs before logging is set up, so a load failure is returned as a
/// message for the caller to log later instead of being logged here.
pub fn load_dotenv() -> Option<String> {
    dotenv_warning(dotenvy::dotenv())
}

fn dotenv_warning(result: Result<PathBuf, dotenvy::Error>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(format!("Failed to load .env file: {}", e)),
        _ => None,
    }
}

//! Extracts title, ingredients and steps from a recipe photo.

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use tracing::{debug, error};

use crate::clients::{LlmClient, LlmReply};
use crate::config::Config;
use crate::error::{AppError, AppResult, LlmError};
use crate::models::ExtractionResponse;

const EXTRACTION_PROMPT: &str = "The attached image is a receipt for a dish. Extract the title, \
the steps and the ingredients and return them, exactly as they are in the image. \
Do not change or translate the text.

Respond with a single JSON object and nothing else, using this shape:
{\"title\": \"...\", \"ingredients\": \"...\", \"steps\": \"...\"}
Use newlines inside \"ingredients\" and \"steps\" to separate items.";

const SYSTEM_MESSAGE: &str =
    "You transcribe recipes from photos into JSON. You never invent content.";

pub struct ExtractionService {
    llm_client: LlmClient,
}

impl ExtractionService {
    pub fn new(config: &Config) -> Self {
        Self {
            llm_client: LlmClient::new(config),
        }
    }

    /// Reads the image at `path` and asks the model to transcribe it.
    pub async fn parse_image_file(&self, path: &Path) -> AppResult<ExtractionResponse> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        debug!("Read image {} ({} bytes)", path.display(), bytes.len());

        self.parse_image(&general_purpose::STANDARD.encode(bytes))
            .await
    }

    /// Sends an already base64-encoded JPEG to the model.
    pub async fn parse_image(&self, base64_image: &str) -> AppResult<ExtractionResponse> {
        let image_url = format!("data:image/jpeg;base64,{}", base64_image);
        let reply = self
            .llm_client
            .send_with_image(EXTRACTION_PROMPT, Some(SYSTEM_MESSAGE), &image_url)
            .await?;

        let data = parse_reply(reply, self.llm_client.model_name()).map_err(|e| {
            error!("Something went wrong with the LLM response: {}", e);
            e
        })?;

        debug!("LLM responded with {:?}", data);
        Ok(data)
    }
}

/// Turns the assistant message into an [`ExtractionResponse`].
fn parse_reply(reply: LlmReply, model: &str) -> AppResult<ExtractionResponse> {
    if let Some(refusal) = reply.refusal.filter(|r| !r.trim().is_empty()) {
        return Err(LlmError::Refused { refusal }.into());
    }

    let content = reply
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| LlmError::EmptyContent {
            model: model.to_string(),
        })?;

    let json = strip_code_fence(&content);
    let data: ExtractionResponse = serde_json::from_str(json)
        .map_err(|e| AppError::malformed_output(e.to_string(), content.as_str()))?;

    if data.title.trim().is_empty() {
        return Err(AppError::malformed_output("title is empty", content.as_str()));
    }

    Ok(data)
}

/// Removes a surrounding Markdown code fence (```json ... ```), if any.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Ok(re) = Regex::new(r"(?s)^```[A-Za-z0-9_-]*\s*\n(.*?)\n?\s*```$") else {
        return trimmed;
    };
    match re.captures(trimmed).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => trimmed,
    }
}

//! Vision LLM client
//!
//! Wraps an OpenAI-compatible chat completions endpoint via `async-openai`.

use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContent,
        ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequestArgs, ImageDetail,
        ImageUrl,
    },
    Client,
};
use backoff::ExponentialBackoffBuilder;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, LlmError};

/// Assistant message returned by the model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmReply {
    pub content: Option<String>,
    pub refusal: Option<String>,
}

/// LLM client
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);
        if let Some(project_id) = &config.llm_project_id {
            openai_config = openai_config.with_project_id(project_id);
        }

        // A failed call ends the run: no retries on 5xx or 429.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
            model_name: config.llm_model_name.clone(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Sends one user message made of a text part and an image part.
    ///
    /// `image_url` may be a regular URL or a `data:` URL.
    pub async fn send_with_image(
        &self,
        user_message: &str,
        system_message: Option<&str>,
        image_url: &str,
    ) -> AppResult<LlmReply> {
        debug!("Calling LLM API, model: {}", self.model_name);
        debug!("User message length: {} chars", user_message.len());

        let model = self.model_name.as_str();
        let mut messages = Vec::new();

        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| AppError::llm_api_failed(model, e))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let content_parts = vec![
            ChatCompletionRequestUserMessageContentPart::Text(
                ChatCompletionRequestMessageContentPartText {
                    text: user_message.to_string(),
                },
            ),
            ChatCompletionRequestUserMessageContentPart::ImageUrl(
                ChatCompletionRequestMessageContentPartImage {
                    image_url: ImageUrl {
                        url: image_url.to_string(),
                        detail: Some(ImageDetail::Auto),
                    },
                },
            ),
        ];

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(content_parts))
            .build()
            .map_err(|e| AppError::llm_api_failed(model, e))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(0.1)
            .max_tokens(4096u32)
            .build()
            .map_err(|e| AppError::llm_api_failed(model, e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API call failed: {}", e);
            AppError::llm_api_failed(model, e)
        })?;

        debug!("LLM API call succeeded");

        let message = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse {
                model: model.to_string(),
            })?
            .message;

        Ok(LlmReply {
            content: message.content,
            refusal: message.refusal,
        })
    }
}

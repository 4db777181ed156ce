use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// User-supplied values rejected before any network call
    #[error("invalid value: {0}")]
    Validation(#[from] ValidationError),
    /// Notion API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    /// Vision / LLM errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    /// File errors
    #[error("file error: {0}")]
    File(#[from] FileError),
    /// Business rule violations
    #[error("{0}")]
    Business(#[from] BusinessError),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var_name} is not set")]
    EnvVarNotFound { var_name: String },
}

/// Validation errors for CLI-supplied fields
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("the country {0} is not valid")]
    InvalidCountry(String),

    #[error("the image {0} does not exist")]
    ImageNotFound(String),

    #[error("the image {0} is not a file")]
    ImageNotAFile(String),

    #[error("the image {path} has MIME type {mime}, expected one of: {allowed}")]
    UnsupportedMimeType {
        path: String,
        mime: String,
        allowed: String,
    },

    #[error("the date {0} is not valid, expected YYYYMMDD")]
    InvalidDate(String),

    #[error("the dish type {value} is not valid, allowed: {allowed}")]
    InvalidDishType { value: String, allowed: String },

    #[error("{field} cannot be empty")]
    EmptyField { field: String },
}

/// Notion API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: code={code:?}, message={message:?}")]
    BadResponse {
        endpoint: String,
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    #[error("failed to parse response from {endpoint}: {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Vision / LLM errors
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API call failed (model: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: async_openai::error::OpenAIError,
    },

    #[error("LLM returned no choices (model: {model})")]
    EmptyResponse { model: String },

    #[error("LLM returned empty content (model: {model})")]
    EmptyContent { model: String },

    #[error("LLM refused the request: {refusal}")]
    Refused { refusal: String },

    #[error("LLM output could not be parsed: {reason}; output: {output}")]
    MalformedOutput { reason: String, output: String },
}

/// File errors
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFileFailed {
        path: String,
        #[source]
        source: tracing_appender::rolling::InitError,
    },
}

/// Business errors
#[derive(Debug, Error)]
pub enum BusinessError {
    #[error("Title \"{title}\" with source \"{source_name}\" has already been used. See: {}", .urls.join(", "))]
    PageAlreadyCreated {
        title: String,
        source_name: String,
        urls: Vec<String>,
    },

    #[error("page payload rejected: {0}")]
    InvalidPayload(String),
}

// ========== convenience constructors ==========

impl AppError {
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    pub fn llm_api_failed(model: impl Into<String>, source: async_openai::error::OpenAIError) -> Self {
        AppError::Llm(LlmError::ApiCallFailed {
            model: model.into(),
            source,
        })
    }

    pub fn malformed_output(reason: impl Into<String>, output: impl Into<String>) -> Self {
        AppError::Llm(LlmError::MalformedOutput {
            reason: reason.into(),
            output: output.into(),
        })
    }

    /// Process exit code for this error.
    ///
    /// Rejected input exits with 2, the same code clap uses for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

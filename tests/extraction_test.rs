mod common;

use common::*;
use cook_upload::error::{AppError, LlmError};
use cook_upload::services::ExtractionService;
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_parse_image_file_sends_data_url() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", format!("Bearer {OPENAI_KEY}"))
                .body_contains("data:image/jpeg;base64,")
                .body_contains("gpt-4o-mini");
            then.status(200).json_body(chat_completion(
                Some(&extraction_json("Baklava", "filo\nwalnuts", "layer\nbake")),
                None,
            ));
        })
        .await;

    let dir = TempDir::new().unwrap();
    let image = write_image(&dir, "baklava.jpg");

    let service = ExtractionService::new(&test_config(&server));
    let data = service.parse_image_file(&image).await.unwrap();

    mock.assert_async().await;
    assert_eq!(data.title, "Baklava");
    assert_eq!(data.ingredients, "filo\nwalnuts");
    assert_eq!(data.steps, "layer\nbake");
}

#[tokio::test]
async fn test_project_header_is_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("openai-project", "proj_1");
            then.status(200).json_body(chat_completion(
                Some(&extraction_json("Moise", "a,b,c", "a,b,c")),
                None,
            ));
        })
        .await;

    let mut config = test_config(&server);
    config.llm_project_id = Some("proj_1".to_string());

    let data = ExtractionService::new(&config)
        .parse_image("aGVsbG8=")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(data.title, "Moise");
}

#[tokio::test]
async fn test_refusal_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(chat_completion(None, Some("I can't help with that.")));
        })
        .await;

    let err = ExtractionService::new(&test_config(&server))
        .parse_image("aGVsbG8=")
        .await
        .unwrap_err();

    match err {
        AppError::Llm(LlmError::Refused { refusal }) => {
            assert_eq!(refusal, "I can't help with that.")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_non_json_reply_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(chat_completion(Some("This is a photo of a cake."), None));
        })
        .await;

    let err = ExtractionService::new(&test_config(&server))
        .parse_image("aGVsbG8=")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Llm(LlmError::MalformedOutput { .. })));
}

#[tokio::test]
async fn test_missing_image_file() {
    let server = MockServer::start_async().await;
    let dir = TempDir::new().unwrap();

    let err = ExtractionService::new(&test_config(&server))
        .parse_image_file(&dir.path().join("missing.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::File(_)));
}

#[tokio::test]
async fn test_server_error_is_api_call_failure() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500).body("upstream unavailable");
        })
        .await;

    let err = ExtractionService::new(&test_config(&server))
        .parse_image("aGVsbG8=")
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        AppError::Llm(LlmError::ApiCallFailed { model, .. }) => assert_eq!(model, "gpt-4o-mini"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_no_choices_is_empty_response() {
    let server = MockServer::start_async().await;
    let mut completion = chat_completion(None, None);
    completion["choices"] = serde_json::json!([]);
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(completion);
        })
        .await;

    let err = ExtractionService::new(&test_config(&server))
        .parse_image("aGVsbG8=")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Llm(LlmError::EmptyResponse { .. })));
}

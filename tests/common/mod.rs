#![allow(dead_code)]

use std::path::PathBuf;

use cook_upload::Config;
use httpmock::MockServer;
use serde_json::{json, Value};
use tempfile::TempDir;

pub const DB_ID: &str = "56dada1e4604428b9e2d7d1a8d2ad131";
pub const NOTION_KEY: &str = "secret_test";
pub const OPENAI_KEY: &str = "sk-test";

/// Config pointing both APIs at the mock server
pub fn test_config(server: &MockServer) -> Config {
    Config {
        llm_api_key: OPENAI_KEY.to_string(),
        llm_project_id: None,
        llm_api_base_url: format!("{}/v1", server.base_url()),
        notion_api_key: NOTION_KEY.to_string(),
        notion_db_id: DB_ID.to_string(),
        notion_api_base_url: server.base_url(),
        ..Config::default()
    }
}

/// Writes a tiny JPEG-looking file and returns its path
pub fn write_image(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00").expect("write image fixture");
    path
}

pub fn db_metadata(types: &[&str]) -> Value {
    let options: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, name)| json!({"id": format!("opt-{i}"), "name": name, "color": "default"}))
        .collect();
    json!({
        "object": "database",
        "id": DB_ID,
        "url": format!("https://www.notion.so/{DB_ID}"),
        "properties": {
            "Type": {"id": "a", "name": "Type", "type": "select", "select": {"options": options}},
            "Origin": {"id": "b", "name": "Origin", "type": "select", "select": {"options": []}},
            "Difficulty": {"id": "c", "name": "Difficulty", "type": "select", "select": {"options": [
                {"id": "e", "name": "Easy", "color": "green"},
                {"id": "m", "name": "Medium", "color": "yellow"},
                {"id": "h", "name": "Hard", "color": "red"}
            ]}},
            "Source": {"id": "d", "name": "Source", "type": "rich_text", "rich_text": {}},
            "Date": {"id": "f", "name": "Date", "type": "date", "date": {}},
            "Name": {"id": "title", "name": "Name", "type": "title", "title": {}}
        }
    })
}

pub fn page_result(title: &str, url: &str) -> Value {
    json!({
        "object": "page",
        "id": format!("{title}-id"),
        "url": url,
        "properties": {
            "Name": {"id": "title", "type": "title", "title": [
                {"type": "text", "text": {"content": title, "link": null}, "plain_text": title, "href": null}
            ]}
        }
    })
}

pub fn query_response(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "next_cursor": next_cursor,
        "has_more": next_cursor.is_some(),
        "type": "page_or_database",
        "page_or_database": {}
    })
}

pub fn title_filter(title: &str) -> Value {
    json!({"filter": {"property": "Name", "title": {"equals": title}}})
}

/// Chat completion whose assistant message is `content` / `refusal`
pub fn chat_completion(content: Option<&str>, refusal: Option<&str>) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1731960090,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content, "refusal": refusal},
            "logprobs": null,
            "finish_reason": "stop"
        }]
    })
}

pub fn extraction_json(title: &str, ingredients: &str, steps: &str) -> String {
    json!({"title": title, "ingredients": ingredients, "steps": steps}).to_string()
}

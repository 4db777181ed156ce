/// Notion API client
///
/// Thin `reqwest` wrapper over the three endpoints this tool needs.
use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::notion::{
    CreatedPage, NotionDbMetadata, NotionDbSearch, NotionErrorBody, NotionNewPage,
};

/// Notion API client
pub struct NotionClient {
    http: Client,
    base_url: String,
    api_key: String,
    db_id: String,
    notion_version: String,
}

impl NotionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.notion_api_base_url.trim_end_matches('/').to_string(),
            api_key: config.notion_api_key.clone(),
            db_id: config.notion_db_id.clone(),
            notion_version: config.notion_version.clone(),
        }
    }

    /// `GET /databases/{id}`
    pub async fn get_db_metadata(&self) -> AppResult<NotionDbMetadata> {
        let url = format!("{}/databases/{}", self.base_url, self.db_id);
        self.send::<(), _>(Method::GET, &url, None).await
    }

    /// `POST /databases/{id}/query` filtered on `Name == title`.
    ///
    /// Follows `next_cursor` until every page of results has been read.
    /// Notion returns the whole database when `title` is empty.
    pub async fn query_by_title(&self, title: &str) -> AppResult<NotionDbSearch> {
        let url = format!("{}/databases/{}/query", self.base_url, self.db_id);
        let mut body = json!({
            "filter": {"property": "Name", "title": {"equals": title}}
        });

        let mut merged: NotionDbSearch = self.send(Method::POST, &url, Some(&body)).await?;
        while merged.has_more {
            let Some(cursor) = merged.next_cursor.take() else {
                break;
            };
            debug!("Fetching next query page, cursor: {}", cursor);
            body["start_cursor"] = Value::String(cursor);

            let page: NotionDbSearch = self.send(Method::POST, &url, Some(&body)).await?;
            merged.results.extend(page.results);
            merged.has_more = page.has_more;
            merged.next_cursor = page.next_cursor;
        }

        Ok(merged)
    }

    /// `POST /pages`
    pub async fn create_page(&self, page: &NotionNewPage) -> AppResult<CreatedPage> {
        let url = format!("{}/pages", self.base_url);
        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                "New page payload: {}",
                serde_json::to_string(page).unwrap_or_default()
            );
        }
        self.send(Method::POST, &url, Some(page)).await
    }

    async fn send<B, T>(&self, method: Method, url: &str, body: Option<&B>) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", &self.notion_version)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(url, e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(url, e))?;

        if !status.is_success() {
            let error_body: NotionErrorBody = serde_json::from_str(&text).unwrap_or_default();
            return Err(ApiError::BadResponse {
                endpoint: url.to_string(),
                status: status.as_u16(),
                code: error_body.code,
                message: error_body.message,
            }
            .into());
        }

        serde_json::from_str(&text).map_err(|source| {
            ApiError::JsonParseFailed {
                endpoint: url.to_string(),
                source,
            }
            .into()
        })
    }
}

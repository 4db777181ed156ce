use serde::Deserialize;

use super::common::{plain_text, RichText};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TitleColumn {
    #[serde(default)]
    pub title: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RichTextColumn {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultProperties {
    #[serde(rename = "Name", default)]
    pub name: TitleColumn,
    #[serde(rename = "Source", default)]
    pub source: RichTextColumn,
}

/// One page returned by a database query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub properties: ResultProperties,
}

impl SearchResult {
    pub fn title(&self) -> String {
        plain_text(&self.properties.name.title)
    }

    pub fn source(&self) -> String {
        plain_text(&self.properties.source.rich_text)
    }
}

/// Response of `POST /databases/{id}/query`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotionDbSearch {
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

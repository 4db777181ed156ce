use serde::{Deserialize, Serialize};

/// Rich text item as returned by Notion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Joins the plain text of a rich text array
pub fn plain_text(items: &[RichText]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

/// Page object returned by `POST /pages`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Error object returned by Notion on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_concatenates() {
        let items: Vec<RichText> = serde_json::from_value(serde_json::json!([
            {"type": "text", "plain_text": "Bak", "href": null, "annotations": {"bold": true}},
            {"type": "text", "plain_text": "lava"}
        ]))
        .unwrap();
        assert_eq!(plain_text(&items), "Baklava");
    }
}

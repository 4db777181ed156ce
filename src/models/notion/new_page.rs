use serde::Serialize;

use crate::error::BusinessError;

/// Maximum length of a single rich text `content`, in characters
pub const RICH_TEXT_LIMIT: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent {
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

/// Outgoing rich text item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextItem {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub text: TextContent,
}

impl TextItem {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: None,
            text: TextContent {
                content: content.into(),
            },
        }
    }

    pub fn typed(content: impl Into<String>) -> Self {
        Self {
            kind: Some("text"),
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleProperty {
    pub title: Vec<TextItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectProperty {
    pub select: SelectName,
}

impl SelectProperty {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            select: SelectName { name: name.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextProperty {
    pub rich_text: Vec<TextItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateStart {
    pub start: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateProperty {
    pub date: DateStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPageProperties {
    #[serde(rename = "Name")]
    pub name: TitleProperty,
    #[serde(rename = "Type")]
    pub dish_type: SelectProperty,
    #[serde(rename = "Origin", skip_serializing_if = "Option::is_none")]
    pub origin: Option<SelectProperty>,
    #[serde(rename = "Difficulty")]
    pub difficulty: SelectProperty,
    #[serde(rename = "Source")]
    pub source: RichTextProperty,
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockText {
    pub rich_text: Vec<TextItem>,
}

/// Block body, tagged by its `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: BlockText },
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: BlockText },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub object: &'static str,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn heading_2(text: &str) -> Self {
        Self {
            object: "block",
            kind: BlockKind::Heading2 {
                heading_2: BlockText {
                    rich_text: vec![TextItem::typed(text)],
                },
            },
        }
    }

    /// Paragraph holding `text`, split into items of at most
    /// [`RICH_TEXT_LIMIT`] characters
    pub fn paragraph(text: &str) -> Self {
        Self {
            object: "block",
            kind: BlockKind::Paragraph {
                paragraph: BlockText {
                    rich_text: split_rich_text(text)
                        .into_iter()
                        .map(TextItem::typed)
                        .collect(),
                },
            },
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, BlockKind::Heading2 { .. })
    }

    pub fn rich_text(&self) -> &[TextItem] {
        match &self.kind {
            BlockKind::Heading2 { heading_2 } => &heading_2.rich_text,
            BlockKind::Paragraph { paragraph } => &paragraph.rich_text,
        }
    }
}

/// Request body of `POST /pages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotionNewPage {
    pub parent: Parent,
    pub properties: NewPageProperties,
    pub children: Vec<Block>,
}

impl NotionNewPage {
    /// Checks the payload against the constraints Notion enforces
    /// (and the layout this tool always writes).
    pub fn validate(&self) -> Result<(), BusinessError> {
        let invalid = |reason: &str| Err(BusinessError::InvalidPayload(reason.to_string()));

        if self.parent.database_id.trim().is_empty() {
            return invalid("parent.database_id is empty");
        }
        if self
            .properties
            .name
            .title
            .iter()
            .all(|item| item.text.content.trim().is_empty())
        {
            return invalid("Name is empty");
        }
        if self.properties.dish_type.select.name.trim().is_empty() {
            return invalid("Type is empty");
        }
        if self.properties.difficulty.select.name.trim().is_empty() {
            return invalid("Difficulty is empty");
        }
        if self
            .properties
            .source
            .rich_text
            .iter()
            .all(|item| item.text.content.trim().is_empty())
        {
            return invalid("Source is empty");
        }
        if let Some(origin) = &self.properties.origin {
            if origin.select.name.trim().is_empty() {
                return invalid("Origin is present but empty");
            }
        }

        let layout: Vec<bool> = self.children.iter().map(Block::is_heading).collect();
        if layout != [true, false, true, false] {
            return invalid("children must be heading, paragraph, heading, paragraph");
        }

        let all_items = self
            .properties
            .name
            .title
            .iter()
            .chain(&self.properties.source.rich_text)
            .chain(self.children.iter().flat_map(|block| block.rich_text()));
        for item in all_items {
            if item.text.content.chars().count() > RICH_TEXT_LIMIT {
                return invalid("rich text item exceeds 2000 characters");
            }
        }

        Ok(())
    }
}

/// Splits text into chunks of at most [`RICH_TEXT_LIMIT`] characters.
///
/// Always returns at least one chunk.
pub fn split_rich_text(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(RICH_TEXT_LIMIT)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

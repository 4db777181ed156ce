//! Builds the `POST /pages` payload from a [`DishRecord`].

use crate::error::BusinessError;
use crate::models::notion::new_page::{
    split_rich_text, Block, DateProperty, DateStart, NewPageProperties, Parent, RichTextProperty,
    SelectProperty, TextItem, TitleProperty,
};
use crate::models::notion::NotionNewPage;
use crate::models::DishRecord;

pub const INGREDIENTS_HEADING: &str = "Ingredients";
pub const STEPS_HEADING: &str = "Steps";

pub struct PageBuilder {
    database_id: String,
}

impl PageBuilder {
    pub fn new(database_id: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
        }
    }

    /// Fills the page template and validates the result.
    pub fn build(&self, record: &DishRecord) -> Result<NotionNewPage, BusinessError> {
        let page = NotionNewPage {
            parent: Parent {
                database_id: self.database_id.clone(),
            },
            properties: NewPageProperties {
                name: TitleProperty {
                    title: split_rich_text(&record.title)
                        .into_iter()
                        .map(TextItem::plain)
                        .collect(),
                },
                dish_type: SelectProperty::named(record.dish_type.as_str()),
                origin: record.origin.as_deref().map(SelectProperty::named),
                difficulty: SelectProperty::named(record.difficulty.label()),
                source: RichTextProperty {
                    rich_text: split_rich_text(&record.source)
                        .into_iter()
                        .map(TextItem::plain)
                        .collect(),
                },
                date: record.formatted_date().map(|start| DateProperty {
                    date: DateStart { start },
                }),
            },
            children: vec![
                Block::heading_2(INGREDIENTS_HEADING),
                Block::paragraph(&record.ingredients),
                Block::heading_2(STEPS_HEADING),
                Block::paragraph(&record.steps),
            ],
        };

        page.validate()?;
        Ok(page)
    }
}

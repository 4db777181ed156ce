//! Serialization contract with the Notion API.
//!
//! Only the fields this tool reads are modelled; everything else in the
//! responses is ignored.

pub mod common;
pub mod db_metadata;
pub mod db_search;
pub mod new_page;

pub use common::{CreatedPage, NotionErrorBody, RichText};
pub use db_metadata::{NotionDbMetadata, SelectColumn, SelectOption};
pub use db_search::{NotionDbSearch, SearchResult};
pub use new_page::{Block, NotionNewPage, NewPageProperties, RICH_TEXT_LIMIT};

pub mod llm_client;
pub mod notion_client;

pub use llm_client::{LlmClient, LlmReply};
pub use notion_client::NotionClient;

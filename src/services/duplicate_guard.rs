//! Title-uniqueness check performed before page creation.
//!
//! Read-before-write only: two concurrent invocations can still both pass.

use tracing::{debug, info, warn};

use crate::clients::NotionClient;
use crate::error::{AppResult, BusinessError};
use crate::models::notion::NotionDbSearch;

pub struct DuplicateGuard<'a> {
    notion: &'a NotionClient,
}

impl<'a> DuplicateGuard<'a> {
    pub fn new(notion: &'a NotionClient) -> Self {
        Self { notion }
    }

    /// Fails with [`BusinessError::PageAlreadyCreated`] when a page titled
    /// `title` (case-insensitively) already exists. `force` skips the check.
    pub async fn ensure_unique(&self, title: &str, source: &str, force: bool) -> AppResult<()> {
        if force {
            warn!("⚠️ Force flag set, skipping duplicate check for \"{}\"", title);
            return Ok(());
        }

        info!("🔍 Checking whether \"{}\" already exists...", title);
        let search = self.notion.query_by_title(title).await?;
        debug!("Query returned {} page(s)", search.results.len());
        for result in &search.results {
            debug!("  {} (source: {}) {}", result.title(), result.source(), result.url);
        }

        let urls = matching_urls(&search, title);
        if !urls.is_empty() {
            return Err(BusinessError::PageAlreadyCreated {
                title: title.to_string(),
                source_name: source.to_string(),
                urls,
            }
            .into());
        }

        info!("✓ Title is not used yet");
        Ok(())
    }
}

/// URLs of the pages whose title equals `title`, ignoring case and
/// surrounding whitespace.
pub fn matching_urls(search: &NotionDbSearch, title: &str) -> Vec<String> {
    let wanted = title.trim().to_lowercase();
    search
        .results
        .iter()
        .filter(|result| result.title().trim().to_lowercase() == wanted)
        .map(|result| result.url.clone())
        .collect()
}

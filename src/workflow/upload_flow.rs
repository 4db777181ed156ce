//! Upload flow
//!
//! Order of operations:
//! 1. local validation (image, country, date, source), no network
//! 2. database metadata → dish type check
//! 3. vision extraction
//! 4. duplicate guard (unless forced)
//! 5. build + validate the page, then POST it

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::clients::NotionClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{normalize_title, DishRecord};
use crate::services::{validators, DuplicateGuard, ExtractionService, PageBuilder};
use crate::utils::logging::truncate_text;
use crate::workflow::upload_request::UploadRequest;

/// Request fields that passed local validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalInput {
    pub image_path: PathBuf,
    pub origin: Option<String>,
    pub date: Option<NaiveDate>,
    pub source: String,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub title: String,
    pub page_id: String,
    pub page_url: Option<String>,
}

pub struct UploadFlow {
    notion: NotionClient,
    extraction: ExtractionService,
    page_builder: PageBuilder,
}

impl UploadFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            notion: NotionClient::new(config),
            extraction: ExtractionService::new(config),
            page_builder: PageBuilder::new(config.notion_db_id.as_str()),
        }
    }

    /// Validates everything that can be checked without the network.
    pub fn validate_local(request: &UploadRequest, today: NaiveDate) -> AppResult<LocalInput> {
        let image_path = validators::validate_image_path(&request.image_path)?;
        let origin = request
            .country
            .as_deref()
            .map(validators::validate_country)
            .transpose()?;
        let date = validators::parse_date(request.date.as_deref(), today)?;
        let source = validators::validate_non_empty("source", &request.source)?;

        Ok(LocalInput {
            image_path,
            origin,
            date,
            source,
        })
    }

    pub async fn run(&self, request: &UploadRequest) -> AppResult<UploadOutcome> {
        info!("📋 Upload request: {}", request);

        let today = chrono::Local::now().date_naive();
        let input = Self::validate_local(request, today)?;

        info!("📥 Fetching database metadata...");
        let metadata = self.notion.get_db_metadata().await?;
        let dish_type = validators::validate_dish_type(&request.dish_type, &metadata.dish_types())?;

        info!("🤖 Extracting recipe from {}...", input.image_path.display());
        let extracted = self.extraction.parse_image_file(&input.image_path).await?;
        let title = normalize_title(&extracted.title);
        info!("✓ Extracted \"{}\"", title);
        info!("  Ingredients: {}", truncate_text(&extracted.ingredients, 80));
        info!("  Steps: {}", truncate_text(&extracted.steps, 80));

        DuplicateGuard::new(&self.notion)
            .ensure_unique(&title, &input.source, request.force)
            .await?;

        let record = DishRecord {
            title,
            difficulty: request.difficulty,
            dish_type,
            source: input.source,
            origin: input.origin,
            date: input.date,
            ingredients: extracted.ingredients,
            steps: extracted.steps,
        };
        let page = self.page_builder.build(&record)?;

        info!("📤 Creating page...");
        let created = self.notion.create_page(&page).await?;
        info!("✓ Page created: {}", created.url.as_deref().unwrap_or(&created.id));

        Ok(UploadOutcome {
            title: record.title,
            page_id: created.id,
            page_url: created.url,
        })
    }
}

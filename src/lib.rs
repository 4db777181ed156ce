//! # cook-upload
//!
//! Turns a photographed recipe into a page of a Notion database.
//!
//! ## Layers
//!
//! ### ① Clients
//! - `clients/` - talk to the outside world, nothing else
//! - `LlmClient` - OpenAI-compatible chat completions with an image part
//! - `NotionClient` - database metadata, database query, page creation
//!
//! ### ② Services
//! - `services/` - one capability each, no ordering
//! - `ExtractionService` - image → title / ingredients / steps
//! - `DuplicateGuard` - title uniqueness check
//! - `PageBuilder` - `DishRecord` → page payload
//! - `validators` - country, MIME type, date, dish type
//!
//! ### ③ Workflow
//! - `workflow/` - `UploadFlow` runs validate → extract → check → submit
//!
//! ### ④ Entry point
//! - `cli` + `main` - argument parsing, logging, exit codes

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{DishDifficulty, DishRecord};
pub use workflow::{UploadFlow, UploadOutcome, UploadRequest};

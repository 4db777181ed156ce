pub mod duplicate_guard;
pub mod extraction_service;
pub mod page_builder;
pub mod validators;

pub use duplicate_guard::DuplicateGuard;
pub use extraction_service::ExtractionService;
pub use page_builder::PageBuilder;

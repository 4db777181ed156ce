pub mod country;
pub mod dish;
pub mod extraction;
pub mod notion;

pub use country::Country;
pub use dish::{normalize_title, DishDifficulty, DishRecord};
pub use extraction::ExtractionResponse;

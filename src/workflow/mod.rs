pub mod upload_flow;
pub mod upload_request;

pub use upload_flow::{LocalInput, UploadFlow, UploadOutcome};
pub use upload_request::UploadRequest;

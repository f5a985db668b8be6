mod service;
mod types;

pub use service::UploadPipeline;
pub use types::{AnalysisOutcome, UploadError, UploadOutcome, UPLOAD_SUCCESS_MESSAGE};

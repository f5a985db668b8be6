//! Types produced by the upload pipeline

use eduguard_analysis::AnalysisError;
use eduguard_core::models::{
    AnalysisResult, AnalysisSummary, FileInfo, StoredObjectKey, UploadResponse,
};
use eduguard_storage::StorageError;
use thiserror::Error;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";

/// Pipeline failures. Analysis never appears here: it degrades the outcome instead.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    NoFile,

    #[error(transparent)]
    Store(#[from] StorageError),
}

/// What happened to the optional analysis step
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Analysis ran and returned results
    Completed(AnalysisResult),
    /// Not attempted: non-image content or no analyzer configured
    Skipped,
    /// Attempted and failed; the upload still succeeded
    Degraded(AnalysisError),
}

impl AnalysisOutcome {
    pub fn summary(&self) -> Option<AnalysisSummary> {
        match self {
            AnalysisOutcome::Completed(result) => Some(result.summary()),
            AnalysisOutcome::Skipped | AnalysisOutcome::Degraded(_) => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisOutcome::Degraded(_))
    }
}

/// Result of a successful upload
#[derive(Debug)]
pub struct UploadOutcome {
    pub key: StoredObjectKey,
    pub location: String,
    pub file_info: FileInfo,
    pub analysis: AnalysisOutcome,
}

impl UploadOutcome {
    pub fn into_response(self) -> UploadResponse {
        UploadResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            s3_location: self.location,
            analysis: self.analysis.summary(),
            key: self.key.into_inner(),
            file_info: self.file_info,
        }
    }
}

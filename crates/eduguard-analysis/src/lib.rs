//! EduGuard Analysis Library
//!
//! Label and text detection on stored images. The upload pipeline depends only on the
//! [`ImageAnalyzer`] trait; the Rekognition backend lives behind the `rekognition`
//! feature.

mod config;
#[cfg(feature = "rekognition")]
pub mod rekognition;

use async_trait::async_trait;
use eduguard_core::models::{AnalysisResult, ObjectRef};
use thiserror::Error;

pub use config::AnalyzerConfig;
#[cfg(feature = "rekognition")]
pub use rekognition::RekognitionAnalyzer;

/// Image analysis errors
///
/// Provider messages carried by `InvalidCredentials` and `AccessDenied` are kept for
/// logs only.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("AWS credentials not configured for Rekognition analysis.")]
    MissingCredentials,

    #[error("Invalid AWS credentials for Rekognition. Please check your AWS credentials.")]
    InvalidCredentials(String),

    #[error("Access denied to Rekognition. Please check your AWS permissions.")]
    AccessDenied(String),

    #[error("Rekognition analysis failed: {0}")]
    Unknown(String),
}

impl AnalysisError {
    /// Short name for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::MissingCredentials => "missing_credentials",
            AnalysisError::InvalidCredentials(_) => "invalid_credentials",
            AnalysisError::AccessDenied(_) => "access_denied",
            AnalysisError::Unknown(_) => "unknown",
        }
    }
}

pub type AnalysisOutput = Result<AnalysisResult, AnalysisError>;

/// Detects labels and text in an image that is already in object storage.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// Run label detection then text detection against `object` and merge the results.
    async fn analyze(&self, object: &ObjectRef) -> AnalysisOutput;

    /// Whether credentials are available for the provider
    fn is_configured(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_hide_provider_detail() {
        let err = AnalysisError::AccessDenied("not authorized to perform rekognition:DetectLabels".into());
        assert_eq!(
            err.to_string(),
            "Access denied to Rekognition. Please check your AWS permissions."
        );
        assert_eq!(err.kind(), "access_denied");

        let err = AnalysisError::Unknown("throttled".into());
        assert_eq!(err.to_string(), "Rekognition analysis failed: throttled");
    }
}

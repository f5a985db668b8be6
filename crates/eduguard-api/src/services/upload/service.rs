//! Upload pipeline
//!
//! validate → generate key → store → analyze (images only, best effort) → assemble

use std::sync::Arc;

use chrono::{DateTime, Utc};
use eduguard_analysis::ImageAnalyzer;
use eduguard_core::models::{ObjectRef, StoredObjectKey, UploadRequest};
use eduguard_storage::{generate_object_key, Storage};

use super::types::{AnalysisOutcome, UploadError, UploadOutcome};

/// Orchestrates the object store and the image analyzer for one upload.
///
/// Storing is a hard dependency; analysis failures are swallowed into
/// [`AnalysisOutcome::Degraded`].
#[derive(Clone)]
pub struct UploadPipeline {
    storage: Arc<dyn Storage>,
    analyzer: Option<Arc<dyn ImageAnalyzer>>,
}

impl UploadPipeline {
    pub fn new(storage: Arc<dyn Storage>, analyzer: Option<Arc<dyn ImageAnalyzer>>) -> Self {
        Self { storage, analyzer }
    }

    /// Run the pipeline with the current time as key timestamp
    pub async fn run(&self, request: Option<UploadRequest>) -> Result<UploadOutcome, UploadError> {
        self.run_at(request, Utc::now()).await
    }

    pub async fn run_at(
        &self,
        request: Option<UploadRequest>,
        at: DateTime<Utc>,
    ) -> Result<UploadOutcome, UploadError> {
        let request = request.ok_or(UploadError::NoFile)?;

        let key = generate_object_key(at, &request.original_filename);
        let file_info = request.file_info();
        let is_image = request.is_image();

        tracing::info!(
            key = %key,
            original_filename = %request.original_filename,
            content_type = %request.content_type,
            size_bytes = request.size(),
            "Processing upload"
        );

        let location = self
            .storage
            .store(&key, request.data, &request.content_type)
            .await?;

        let analysis = if is_image {
            self.analyze(&key).await
        } else {
            AnalysisOutcome::Skipped
        };

        Ok(UploadOutcome {
            key,
            location,
            file_info,
            analysis,
        })
    }

    async fn analyze(&self, key: &StoredObjectKey) -> AnalysisOutcome {
        let Some(analyzer) = &self.analyzer else {
            tracing::debug!(key = %key, "No analyzer configured, skipping analysis");
            return AnalysisOutcome::Skipped;
        };

        let object = ObjectRef::new(self.storage.bucket(), key.clone());
        match analyzer.analyze(&object).await {
            Ok(result) => AnalysisOutcome::Completed(result),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = e.kind(),
                    key = %key,
                    "Image analysis failed, continuing without analysis"
                );
                AnalysisOutcome::Degraded(e)
            }
        }
    }
}

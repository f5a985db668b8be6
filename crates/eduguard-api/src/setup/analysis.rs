//! Image analyzer setup

use eduguard_analysis::ImageAnalyzer;
use eduguard_core::{Config, StorageBackend};
use std::sync::Arc;

/// Build the image analyzer. Analysis reads objects straight from S3, so there is none
/// for the local backend.
pub async fn setup_analyzer(config: &Config) -> Option<Arc<dyn ImageAnalyzer>> {
    if config.storage_backend() != StorageBackend::S3 {
        tracing::info!(
            backend = %config.storage_backend(),
            "Image analysis disabled for non-S3 storage"
        );
        return None;
    }

    build(config).await
}

#[cfg(feature = "rekognition")]
async fn build(config: &Config) -> Option<Arc<dyn ImageAnalyzer>> {
    let analyzer = eduguard_analysis::RekognitionAnalyzer::from_config(config).await;
    Some(Arc::new(analyzer))
}

#[cfg(not(feature = "rekognition"))]
async fn build(_config: &Config) -> Option<Arc<dyn ImageAnalyzer>> {
    tracing::warn!("Image analysis not available (rekognition feature not enabled)");
    None
}

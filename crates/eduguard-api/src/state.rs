//! Application state shared by all handlers.
//!
//! Clients are built once at startup and shared through `Arc`; nothing here is mutated
//! after construction.

use std::sync::Arc;

use eduguard_analysis::ImageAnalyzer;
use eduguard_core::Config;
use eduguard_storage::Storage;

use crate::services::dashboard::DashboardFeed;
use crate::services::upload::UploadPipeline;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub analyzer: Option<Arc<dyn ImageAnalyzer>>,
    pub dashboard: Arc<dyn DashboardFeed>,
    pub pipeline: UploadPipeline,
}

impl AppState {
    pub fn new(
        config: Config,
        storage: Arc<dyn Storage>,
        analyzer: Option<Arc<dyn ImageAnalyzer>>,
        dashboard: Arc<dyn DashboardFeed>,
    ) -> Self {
        let pipeline = UploadPipeline::new(storage.clone(), analyzer.clone());
        Self {
            config,
            storage,
            analyzer,
            dashboard,
            pipeline,
        }
    }

    /// Whether the analyzer is present and has credentials
    pub fn analysis_configured(&self) -> bool {
        self.analyzer
            .as_ref()
            .map(|a| a.is_configured())
            .unwrap_or(false)
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}

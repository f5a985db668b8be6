//! Test helpers: build AppState and router for integration tests.
//!
//! The router is the production one from `setup::routes`; only the storage backend and
//! the image analyzer are replaced by recording fakes, so no test touches the network.

#![allow(dead_code)]

pub mod analyzer;
pub mod fixtures;
pub mod storage;

use axum_test::TestServer;
use eduguard_analysis::ImageAnalyzer;
use eduguard_api::setup::routes;
use eduguard_api::{AppState, StaticDashboardFeed};
use eduguard_core::Config;
use std::collections::HashMap;
use std::sync::Arc;

pub use analyzer::FakeAnalyzer;
pub use storage::RecordingStorage;

/// Test application: server plus handles on the fakes behind it.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<RecordingStorage>,
    pub analyzer: Option<Arc<FakeAnalyzer>>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyzer.as_ref().map(|a| a.calls()).unwrap_or(0)
    }
}

/// Configuration from explicit pairs only; the process environment is never read.
pub fn test_config(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(|key| vars.get(key).cloned()).expect("Failed to build test config")
}

pub fn setup_test_app_with(
    config: Config,
    storage: RecordingStorage,
    analyzer: Option<FakeAnalyzer>,
) -> TestApp {
    let storage = Arc::new(storage);
    let analyzer = analyzer.map(Arc::new);

    let state = Arc::new(AppState::new(
        config.clone(),
        storage.clone(),
        analyzer.clone().map(|a| a as Arc<dyn ImageAnalyzer>),
        Arc::new(StaticDashboardFeed),
    ));

    let router = routes::setup_routes(&config, state).expect("Failed to build routes");
    let server =
        TestServer::new(router.into_make_service()).expect("Failed to start test server");

    TestApp {
        server,
        storage,
        analyzer,
    }
}

/// Default configuration, working storage, analyzer that succeeds.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(
        test_config(&[]),
        RecordingStorage::new(),
        Some(FakeAnalyzer::succeeding(fixtures::sample_analysis())),
    )
}

//! Application setup and initialization
//!
//! Everything `main` needs before serving: telemetry, clients, state and routes.

pub mod analysis;
pub mod routes;
pub mod server;
pub mod storage;

use crate::services::dashboard::StaticDashboardFeed;
use crate::state::AppState;
use anyhow::Result;
use eduguard_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    log_config_summary(&config);

    let storage = storage::setup_storage(&config).await?;
    let analyzer = analysis::setup_analyzer(&config).await;

    let state = Arc::new(AppState::new(
        config.clone(),
        storage,
        analyzer,
        Arc::new(StaticDashboardFeed),
    ));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

fn log_config_summary(config: &Config) {
    tracing::info!(
        environment = %config.environment(),
        port = config.server_port(),
        region = %config.aws_region(),
        storage_backend = %config.storage_backend(),
        s3_endpoint = ?config.s3_endpoint(),
        aws_credentials = if config.has_aws_credentials() { "set" } else { "missing" },
        remote_call_timeout_secs = config.remote_call_timeout().as_secs(),
        "Configuration loaded and validated successfully"
    );

    if !config.has_aws_credentials() {
        tracing::warn!(
            "AWS credentials not found. Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY; uploads to S3 will fail until then"
        );
    }
}

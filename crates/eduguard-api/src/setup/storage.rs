//! Storage setup and initialization

use anyhow::{Context, Result};
use eduguard_core::Config;
use eduguard_storage::{create_storage, Storage};
use std::sync::Arc;
use std::time::Instant;

/// Build the configured storage backend and start a background connectivity probe.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage")?;
    tracing::info!(
        backend = %storage.backend_type(),
        bucket = %storage.bucket(),
        configured = storage.is_configured(),
        "Storage initialized"
    );

    if storage.is_configured() {
        spawn_probe(storage.clone());
    }

    Ok(storage)
}

/// Check reachability once. The result is only logged; startup never waits on it.
fn spawn_probe(storage: Arc<dyn Storage>) {
    tokio::spawn(async move {
        let start = Instant::now();
        match storage.probe().await {
            Ok(()) => tracing::info!(
                bucket = %storage.bucket(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Storage connectivity check succeeded"
            ),
            Err(e) => tracing::warn!(
                bucket = %storage.bucket(),
                error = %e,
                error_kind = e.kind(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Storage connectivity check failed"
            ),
        }
    });
}

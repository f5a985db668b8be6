//! Health check handler and response types.

use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

const CONFIGURED: &str = "configured";
const NOT_CONFIGURED: &str = "not_configured";

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    #[schema(example = "configured")]
    pub s3: &'static str,
    #[schema(example = "not_configured")]
    pub rekognition: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
    pub services: ServiceStatus,
}

fn status_label(configured: bool) -> &'static str {
    if configured {
        CONFIGURED
    } else {
        NOT_CONFIGURED
    }
}

/// Liveness plus credential presence for each remote service. Makes no remote calls.
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        services: ServiceStatus {
            s3: status_label(state.storage.is_configured()),
            rekognition: status_label(state.analysis_configured()),
        },
    })
}

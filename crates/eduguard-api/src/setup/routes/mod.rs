//! Route configuration and setup.

pub mod health;

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use eduguard_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Whole-body cap as a multiple of the file limit. The file's own size is checked while
/// it is read, so this only bounds the rest of the form.
const BODY_LIMIT_FACTOR: usize = 2;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let http_concurrency_limit = config.http_concurrency_limit().max(1);
    let body_limit = config
        .max_file_size_bytes()
        .saturating_mul(BODY_LIMIT_FACTOR);
    tracing::info!(
        http_concurrency_limit,
        body_limit_bytes = body_limit,
        "HTTP layers configured"
    );

    let app = Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(health::health_check))
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/upload", post(handlers::upload::upload_file))
        .route("/test-upload", post(handlers::upload::test_upload))
        .route("/api/openapi.json", get(openapi_json))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn openapi_json() -> impl IntoResponse {
    Json(crate::api_doc::openapi_spec())
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

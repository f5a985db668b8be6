//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::setup::routes::health;
use eduguard_core::models;

/// Returns the OpenAPI document served at `/api/openapi.json`.
pub fn openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EduGuard API",
        version = "0.1.0",
        description = "Exam proctoring upload service. Student files are stored in S3; images are additionally run through label and text detection."
    ),
    paths(
        handlers::root::root,
        health::health_check,
        handlers::dashboard::get_dashboard,
        handlers::upload::upload_file,
        handlers::upload::test_upload,
    ),
    components(
        schemas(
            models::UploadResponse,
            models::TestUploadResponse,
            models::FileInfo,
            models::AnalysisSummary,
            models::LabelSummary,
            models::TextSummary,
            models::DashboardRecord,
            health::HealthResponse,
            health::ServiceStatus,
            handlers::root::RootResponse,
            handlers::root::EndpointIndex,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "upload", description = "Student file uploads"),
        (name = "dashboard", description = "Student performance overview"),
        (name = "service", description = "Service banner and health")
    )
)]
pub struct ApiDoc;

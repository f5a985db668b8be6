use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointIndex {
    pub upload: &'static str,
    pub test_upload: &'static str,
    pub health: &'static str,
    pub dashboard: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: &'static str,
    pub endpoints: EndpointIndex,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Service banner and endpoint index", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "EduGuard Backend Server is running!",
        endpoints: EndpointIndex {
            upload: "POST /upload",
            test_upload: "POST /test-upload",
            health: "GET /health",
            dashboard: "GET /dashboard",
        },
    })
}

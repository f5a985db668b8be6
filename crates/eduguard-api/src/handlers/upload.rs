use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{read_upload, validate_file_size, validate_upload};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use eduguard_core::models::{TestUploadResponse, UploadResponse};
use eduguard_core::AppError;
use std::sync::Arc;

const TEST_UPLOAD_MESSAGE: &str = "Test upload successful (no AWS operations)";
const TEST_UPLOAD_NOTE: &str =
    "This is a test endpoint. For full functionality, configure AWS credentials.";

#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored; analysis included for images when it succeeded", body = UploadResponse),
        (status = 400, description = "No file, invalid type, file too large or malformed form", body = ErrorResponse),
        (status = 500, description = "Storage or configuration failure", body = ErrorResponse)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let limits = state.config.upload();
    let request = read_upload(multipart, limits.max_file_size_bytes).await?;

    if let Some(request) = &request {
        validate_upload(request, limits)?;
    }

    let outcome = state.pipeline.run(request).await?;

    if outcome.analysis.is_degraded() {
        tracing::info!(key = %outcome.key, "Upload succeeded without analysis");
    }

    Ok(Json(outcome.into_response()))
}

#[utoipa::path(
    post,
    path = "/test-upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File received and measured; nothing is stored", body = TestUploadResponse),
        (status = 400, description = "No file, file too large or malformed form", body = ErrorResponse)
    )
)]
pub async fn test_upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TestUploadResponse>, HttpAppError> {
    let max_file_size = state.config.max_file_size_bytes();
    let request = read_upload(multipart, max_file_size)
        .await?
        .ok_or(AppError::NoFile)?;

    validate_file_size(request.size(), max_file_size)?;

    tracing::debug!(
        original_filename = %request.original_filename,
        size_bytes = request.size(),
        "Test upload received"
    );

    Ok(Json(TestUploadResponse {
        message: TEST_UPLOAD_MESSAGE.to_string(),
        file_info: request.file_info(),
        note: TEST_UPLOAD_NOTE.to_string(),
    }))
}

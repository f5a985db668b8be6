//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`. Use
//! `AppError` (or types that implement `Into<AppError>`) for errors so they become
//! `HttpAppError` and render consistently as `{error, details}`.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eduguard_core::{AppError, ErrorMetadata, LogLevel};
use eduguard_storage::StorageError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::upload::UploadError;

/// Error envelope returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable summary
    #[schema(example = "Upload failed")]
    pub error: String,
    /// Diagnostic message (provider message for remote failures)
    #[schema(example = "Access denied to S3 bucket. Please check your AWS permissions.")]
    pub details: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from eduguard-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Map a multipart read failure. Hitting the body limit is reported as an oversize file.
pub fn multipart_error(err: MultipartError, max_file_size: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge {
            size: None,
            max: max_file_size,
        }
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
            details: app_error.details(),
        });

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(storage_to_app_error(err))
    }
}

pub(crate) fn storage_to_app_error(err: StorageError) -> AppError {
    if err.is_configuration() {
        AppError::Configuration(err.to_string())
    } else {
        match err {
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::Io(io) => AppError::Internal(format!("IO error: {}", io)),
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl From<UploadError> for HttpAppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::NoFile => HttpAppError(AppError::NoFile),
            UploadError::Store(storage) => HttpAppError::from(storage),
        }
    }
}

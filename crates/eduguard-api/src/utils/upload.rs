//! Common utilities for file upload handlers

use axum::extract::{multipart::MultipartRejection, Multipart};
use bytes::BytesMut;
use eduguard_core::constants::UPLOAD_FIELD_NAME;
use eduguard_core::models::UploadRequest;
use eduguard_core::{AppError, UploadConfig};

use crate::error::multipart_error;
use crate::validation::{file_extension, validate_extension_content_type_match};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const INVALID_TYPE_DETAILS: &str = "The file type or extension is not on the accepted list";

fn invalid_file_type() -> AppError {
    AppError::InvalidFileType(INVALID_TYPE_DETAILS.to_string())
}

/// Extract the uploaded file from the multipart form.
///
/// The file is the field named "file" that carries a filename; a second one is rejected.
/// Plain text fields, including a text field named "file", are ignored. Returns `None`
/// when the form carries no file. Reading stops with `FileTooLarge` as soon as the file
/// passes `max_file_size`.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<Option<UploadRequest>, AppError> {
    let mut upload: Option<UploadRequest> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_file_size))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            tracing::debug!("Ignoring 'file' field without a filename");
            continue;
        };

        if upload.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let mut data = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, max_file_size))?
        {
            data.extend_from_slice(&chunk);
            if data.len() > max_file_size {
                return Err(AppError::FileTooLarge {
                    size: Some(data.len()),
                    max: max_file_size,
                });
            }
        }

        upload = Some(UploadRequest::new(data.freeze(), filename, content_type));
    }

    Ok(upload)
}

/// Like [`extract_multipart_file`], but a request that is not multipart at all counts as
/// carrying no file.
pub async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
    max_file_size: usize,
) -> Result<Option<UploadRequest>, AppError> {
    match multipart {
        Ok(multipart) => extract_multipart_file(multipart, max_file_size).await,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Request is not multipart/form-data");
            Ok(None)
        }
    }
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::FileTooLarge {
            size: Some(file_size),
            max: max_size,
        });
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against allowlist. Compares normalized MIME type only (no parameter bypass).
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        tracing::debug!(content_type, "Rejected upload content type");
        return Err(invalid_file_type());
    }
    Ok(())
}

/// Validate file extension
pub fn validate_file_extension(
    filename: &str,
    allowed_extensions: &[String],
) -> Result<String, AppError> {
    let extension = file_extension(filename).unwrap_or_default();

    if !allowed_extensions.contains(&extension) {
        tracing::debug!(filename, extension = %extension, "Rejected upload extension");
        return Err(invalid_file_type());
    }

    Ok(extension)
}

/// All boundary checks for `/upload`: size, declared type, extension, and their agreement.
pub fn validate_upload(request: &UploadRequest, limits: &UploadConfig) -> Result<(), AppError> {
    validate_file_size(request.size(), limits.max_file_size_bytes)?;
    validate_content_type(&request.content_type, &limits.allowed_content_types)?;
    validate_file_extension(&request.original_filename, &limits.allowed_extensions)?;
    validate_extension_content_type_match(&request.original_filename, &request.content_type)
        .map_err(|reason| {
            tracing::debug!(reason = %reason, "Rejected upload type mismatch");
            invalid_file_type()
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn request(name: &str, content_type: &str, len: usize) -> UploadRequest {
        UploadRequest::new(Bytes::from(vec![0u8; len]), name, content_type)
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_file_size(10, 10).is_ok());
        assert!(matches!(
            validate_file_size(11, 10),
            Err(AppError::FileTooLarge { size: Some(11), max: 10 })
        ));
    }

    #[test]
    fn test_content_type_parameters_ignored() {
        let allowed = vec!["image/jpeg".to_string()];
        assert!(validate_content_type("IMAGE/JPEG; charset=binary", &allowed).is_ok());
        assert!(validate_content_type("text/plain", &allowed).is_err());
    }

    #[test]
    fn test_default_limits_accept_documents_and_images() {
        let limits = UploadConfig::default();
        assert!(validate_upload(&request("photo.jpg", "image/jpeg", 5), &limits).is_ok());
        assert!(validate_upload(&request("essay.pdf", "application/pdf", 0), &limits).is_ok());
        assert!(validate_upload(&request("old.doc", "application/msword", 5), &limits).is_ok());
    }

    #[test]
    fn test_default_limits_reject_other_types() {
        let limits = UploadConfig::default();
        let err = validate_upload(&request("notes.txt", "text/plain", 5), &limits).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType(_)));

        // Allowed type with a disallowed extension
        let err = validate_upload(&request("payload.exe", "image/png", 5), &limits).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType(_)));

        // Allowed extension and type that disagree
        let err = validate_upload(&request("essay.pdf", "image/png", 5), &limits).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType(_)));
    }

    #[test]
    fn test_invalid_type_details_do_not_echo_the_request() {
        let limits = UploadConfig::default();
        for req in [
            request("notes.txt", "text/plain", 5),
            request("payload.exe", "image/png", 5),
            request("essay.pdf", "image/png", 5),
        ] {
            match validate_upload(&req, &limits).unwrap_err() {
                AppError::InvalidFileType(details) => {
                    assert_eq!(details, INVALID_TYPE_DETAILS);
                    assert!(!details.contains(&req.content_type));
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_oversize_checked_before_type() {
        let limits = UploadConfig {
            max_file_size_bytes: 4,
            ..UploadConfig::default()
        };
        let err = validate_upload(&request("notes.txt", "text/plain", 5), &limits).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { .. }));
    }
}

//! Validation utilities for API handlers

use std::path::Path;

/// Lowercased extension of `filename`, without the dot
pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .filter(|e| !e.is_empty())
}

/// Check that the declared Content-Type is plausible for the file extension, so a
/// document cannot be sent as an image to reach analysis (or the reverse).
pub fn validate_extension_content_type_match(
    filename: &str,
    content_type: &str,
) -> Result<(), String> {
    let Some(extension) = file_extension(filename) else {
        return Err("File must have an extension".to_string());
    };

    let normalized_content_type = content_type.to_lowercase();

    let expected_content_types: &[&str] = match extension.as_str() {
        "jpg" | "jpeg" => &["image/jpeg", "image/jpg", "image/pjpeg"],
        "png" => &["image/png"],
        "gif" => &["image/gif"],
        "webp" => &["image/webp"],
        "bmp" => &["image/bmp"],
        "pdf" => &["application/pdf"],
        "doc" => &["application/msword"],
        "docx" => &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"],
        _ => {
            tracing::debug!(
                extension = %extension,
                content_type = %content_type,
                "Unknown extension, skipping Content-Type/extension cross-validation"
            );
            return Ok(());
        }
    };

    if !expected_content_types.iter().any(|ct| {
        normalized_content_type == *ct || normalized_content_type.starts_with(&format!("{};", ct))
    }) {
        return Err(format!(
            "Content-Type '{}' does not match extension '{}'. Expected one of: {}",
            content_type,
            extension,
            expected_content_types.join(", ")
        ));
    }

    Ok(())
}

//! Compiled-in constants.

/// Bucket receiving every student upload. Not configurable.
pub const BUCKET_NAME: &str = "eduguard-student-uploads-755746343900";

/// Logical prefix under which upload keys are generated.
pub const UPLOAD_PREFIX: &str = "uploads";

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Upload limit used when `MAX_FILE_SIZE_MB` is not set.
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;

/// Name of the multipart field carrying the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "file";

pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "pdf", "doc", "docx"];

pub const DEFAULT_ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

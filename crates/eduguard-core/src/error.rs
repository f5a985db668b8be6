//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Each variant describes how
//! it is presented over HTTP through [`ErrorMetadata`]; the API crate turns that into the
//! `{error, details}` envelope.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for operator-fixable issues like missing configuration
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Human-readable summary, the `error` field of the envelope
    fn client_message(&self) -> String;

    /// Diagnostic message, the `details` field of the envelope
    fn details(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("File too large: limit is {max} bytes")]
    FileTooLarge { size: Option<usize>, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::NoFile => (400, "NO_FILE", LogLevel::Debug),
        AppError::InvalidFileType(_) => (400, "INVALID_FILE_TYPE", LogLevel::Debug),
        AppError::FileTooLarge { .. } => (400, "FILE_TOO_LARGE", LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::Configuration(_) => (500, "CONFIGURATION_ERROR", LogLevel::Warn),
        AppError::Storage(_) => (500, "STORAGE_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NoFile => "NoFile",
            AppError::InvalidFileType(_) => "InvalidFileType",
            AppError::FileTooLarge { .. } => "FileTooLarge",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Configuration(_) => "Configuration",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::NoFile => "No file uploaded".to_string(),
            AppError::InvalidFileType(_) => {
                "Invalid file type. Only images and documents are allowed.".to_string()
            }
            AppError::FileTooLarge { max, .. } => {
                format!("File too large. Maximum size is {}MB.", max / 1024 / 1024)
            }
            AppError::InvalidInput(_) => "Invalid request".to_string(),
            AppError::Configuration(_) | AppError::Storage(_) => "Upload failed".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn details(&self) -> String {
        match self {
            AppError::NoFile => {
                "Attach the file as a multipart form field named 'file'".to_string()
            }
            AppError::InvalidFileType(msg) => msg.clone(),
            AppError::FileTooLarge {
                size: Some(size),
                max,
            } => format!("{} bytes exceeds max {} bytes", size, max),
            AppError::FileTooLarge { size: None, max } => {
                format!("Request body exceeds max {} bytes", max)
            }
            AppError::InvalidInput(msg)
            | AppError::Configuration(msg)
            | AppError::Storage(msg)
            | AppError::Internal(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_input_errors_are_400() {
        for err in [
            AppError::NoFile,
            AppError::InvalidFileType("text/plain".to_string()),
            AppError::FileTooLarge {
                size: Some(11),
                max: 10,
            },
            AppError::InvalidInput("bad multipart".to_string()),
        ] {
            assert_eq!(err.http_status_code(), 400, "{:?}", err);
            assert_eq!(err.log_level(), LogLevel::Debug);
        }
    }

    #[test]
    fn test_configuration_and_remote_errors_are_500() {
        let config = AppError::Configuration("AWS credentials not configured".to_string());
        assert_eq!(config.http_status_code(), 500);
        assert_eq!(config.error_code(), "CONFIGURATION_ERROR");
        assert_eq!(config.client_message(), "Upload failed");
        assert_eq!(config.details(), "AWS credentials not configured");

        let storage = AppError::Storage("Access denied to S3 bucket".to_string());
        assert_eq!(storage.http_status_code(), 500);
        assert_eq!(storage.client_message(), "Upload failed");
        assert_eq!(storage.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_file_too_large_message_uses_megabytes() {
        let err = AppError::FileTooLarge {
            size: Some(11 * 1024 * 1024),
            max: 10 * 1024 * 1024,
        };
        assert_eq!(err.client_message(), "File too large. Maximum size is 10MB.");
        assert!(err.details().contains(&(11 * 1024 * 1024).to_string()));

        let err = AppError::FileTooLarge {
            size: None,
            max: 10 * 1024 * 1024,
        };
        assert!(err.details().starts_with("Request body exceeds"));
    }

    #[test]
    fn test_no_file_envelope_text() {
        let err = AppError::NoFile;
        assert_eq!(err.client_message(), "No file uploaded");
        assert_eq!(err.error_code(), "NO_FILE");
    }

    #[test]
    fn test_error_codes_distinguish_client_failures() {
        assert_eq!(
            AppError::InvalidFileType("text/plain".to_string()).error_code(),
            "INVALID_FILE_TYPE"
        );
        assert_eq!(
            AppError::FileTooLarge { size: None, max: 1 }.error_code(),
            "FILE_TOO_LARGE"
        );
        assert_eq!(AppError::Storage("denied".to_string()).error_code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_internal_errors_hide_behind_generic_summary() {
        let err = AppError::Internal("join error".to_string());
        assert_eq!(err.client_message(), "Internal server error");
        assert_eq!(err.error_type(), "Internal");
    }
}

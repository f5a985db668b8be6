//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use eduguard_core::models::StoredObjectKey;
use thiserror::Error;

/// Storage operation errors
///
/// The first five variants are the object store failure taxonomy reported to clients.
/// Provider messages carried by `InvalidCredentials` and `AccessDenied` are kept for logs
/// and never rendered.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("AWS credentials not configured. Please set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY environment variables.")]
    MissingCredentials,

    #[error("Invalid AWS credentials. Please check your AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY.")]
    InvalidCredentials(String),

    #[error("S3 bucket '{0}' does not exist or you don't have access to it.")]
    BucketNotFound(String),

    #[error("Access denied to S3 bucket. Please check your AWS permissions.")]
    AccessDenied(String),

    #[error("Storage request failed: {0}")]
    Unknown(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StorageError {
    /// Credentials are absent from configuration, as opposed to rejected by the provider
    pub fn is_configuration(&self) -> bool {
        matches!(self, StorageError::MissingCredentials | StorageError::Config(_))
    }

    /// Short name for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::MissingCredentials => "missing_credentials",
            StorageError::InvalidCredentials(_) => "invalid_credentials",
            StorageError::BucketNotFound(_) => "bucket_not_found",
            StorageError::AccessDenied(_) => "access_denied",
            StorageError::Unknown(_) => "unknown",
            StorageError::NotFound(_) => "not_found",
            StorageError::InvalidKey(_) => "invalid_key",
            StorageError::Io(_) => "io",
            StorageError::Config(_) => "config",
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait. The upload
/// pipeline and the HTTP layer only ever see `Arc<dyn Storage>`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` at `key` and return the object's location URL.
    ///
    /// Exactly one object is written, with private access. No retries.
    async fn store(
        &self,
        key: &StoredObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Read back the bytes stored at `key`
    async fn fetch(&self, key: &str) -> StorageResult<Bytes>;

    /// Check that the backend is reachable. Used once at startup.
    async fn probe(&self) -> StorageResult<()>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;

    /// Bucket (or root) that objects are written to
    fn bucket(&self) -> &str;

    /// Whether the backend has what it needs to accept writes
    fn is_configured(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_messages() {
        assert!(StorageError::MissingCredentials
            .to_string()
            .starts_with("AWS credentials not configured"));
        assert_eq!(
            StorageError::BucketNotFound("exams".to_string()).to_string(),
            "S3 bucket 'exams' does not exist or you don't have access to it."
        );
        // Provider detail is not part of the rendered message
        let denied = StorageError::AccessDenied("User arn:aws:iam::1:user/x".to_string());
        assert!(!denied.to_string().contains("arn:aws"));
    }

    #[test]
    fn test_missing_credentials_is_configuration() {
        assert!(StorageError::MissingCredentials.is_configuration());
        assert!(!StorageError::InvalidCredentials(String::new()).is_configuration());
        assert_eq!(StorageError::Unknown("x".into()).kind(), "unknown");
    }
}

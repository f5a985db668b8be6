//! Upload request and response models.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::analysis::AnalysisSummary;

/// A file received over HTTP. Lives for one request only.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Bytes,
    pub original_filename: String,
    pub content_type: String,
}

impl UploadRequest {
    pub fn new(
        data: Bytes,
        original_filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            data,
            original_filename: original_filename.into(),
            content_type: content_type.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the declared content type is an image
    pub fn is_image(&self) -> bool {
        self.content_type.trim().to_ascii_lowercase().starts_with("image/")
    }

    pub fn file_info(&self) -> FileInfo {
        FileInfo {
            original_name: self.original_filename.clone(),
            size: self.size(),
            content_type: self.content_type.clone(),
        }
    }
}

/// File metadata echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    #[schema(example = "photo.jpg")]
    pub original_name: String,
    #[schema(example = 20480)]
    pub size: usize,
    #[serde(rename = "type")]
    #[schema(example = "image/jpeg")]
    pub content_type: String,
}

/// Successful `/upload` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[schema(example = "File uploaded successfully")]
    pub message: String,
    #[schema(
        example = "https://eduguard-student-uploads-755746343900.s3.us-east-1.amazonaws.com/uploads/1700000000000-photo.jpg"
    )]
    pub s3_location: String,
    #[schema(example = "uploads/1700000000000-photo.jpg")]
    pub key: String,
    pub file_info: FileInfo,
    /// Present only for images whose analysis succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisSummary>,
}

/// `/test-upload` response. No remote call is made for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestUploadResponse {
    #[schema(example = "Test upload successful (no AWS operations)")]
    pub message: String,
    pub file_info: FileInfo,
    pub note: String,
}

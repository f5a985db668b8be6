//! EduGuard Core Library
//!
//! This crate provides the domain models, error types, configuration and constants
//! shared by the storage, analysis and API crates.

#[cfg(feature = "aws")]
pub mod aws;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{AwsCredentials, BaseConfig, Config, LogFormat, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;

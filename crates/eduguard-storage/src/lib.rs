//! EduGuard Storage Library
//!
//! This crate provides the object store abstraction used by the upload pipeline: the
//! [`Storage`] trait, its failure taxonomy and two backends (S3 and local filesystem).
//!
//! # Object key format
//!
//! Every upload is stored at `uploads/<timestamp-millis>-<filename>`, where the filename
//! has been canonicalized by [`keys::sanitize_filename`]. Keys must not contain `..` or a
//! leading `/`. Key generation is centralized in the `keys` module so all backends stay
//! consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use eduguard_core::StorageBackend;
pub use factory::create_storage;
pub use keys::{generate_object_key, sanitize_filename};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};

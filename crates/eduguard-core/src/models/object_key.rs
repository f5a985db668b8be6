//! Storage addressing: generated keys and bucket-qualified object references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a stored upload, `uploads/<timestamp-millis>-<filename>`.
///
/// Generated once per upload and used both as the storage address and as the analysis
/// target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredObjectKey(String);

impl StoredObjectKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoredObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoredObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reference to an object in a bucket, handed to the image analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: StoredObjectKey,
}

impl ObjectRef {
    pub fn new(bucket: impl Into<String>, key: StoredObjectKey) -> Self {
        Self {
            bucket: bucket.into(),
            key,
        }
    }
}

use async_trait::async_trait;
use bytes::Bytes;
use eduguard_core::constants::BUCKET_NAME;
use eduguard_core::models::StoredObjectKey;
use eduguard_core::StorageBackend;
use eduguard_storage::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory storage that records every call.
pub struct RecordingStorage {
    objects: Mutex<HashMap<String, (Bytes, String)>>,
    store_calls: AtomicUsize,
    credentials_present: bool,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            store_calls: AtomicUsize::new(0),
            credentials_present: true,
        }
    }

    /// Behaves like S3 without credentials: every write fails with `MissingCredentials`.
    pub fn without_credentials() -> Self {
        Self {
            credentials_present: false,
            ..Self::new()
        }
    }

    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    pub fn content_type_of(&self, key: &str) -> Option<String> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .map(|(_, content_type)| content_type.clone())
    }

    /// Read back through the `Storage` trait
    pub async fn fetch_bytes(&self, key: &str) -> Vec<u8> {
        self.fetch(key).await.expect("object not stored").to_vec()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

impl Default for RecordingStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn store(
        &self,
        key: &StoredObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<String> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        if !self.credentials_present {
            return Err(StorageError::MissingCredentials);
        }
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (data, content_type.to_string()));
        Ok(format!("memory://{}/{}", BUCKET_NAME, key))
    }

    async fn fetch(&self, key: &str) -> StorageResult<Bytes> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .map(|(data, _)| data.clone())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn probe(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }

    fn bucket(&self) -> &str {
        BUCKET_NAME
    }

    fn is_configured(&self) -> bool {
        self.credentials_present
    }
}

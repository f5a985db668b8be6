use crate::keys::is_safe_key;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use bytes::Bytes;
use eduguard_core::aws::{load_sdk_config, provider_code};
use eduguard_core::constants::BUCKET_NAME;
use eduguard_core::models::StoredObjectKey;
use eduguard_core::Config;
use std::future::Future;
use std::time::{Duration, Instant};

/// Settings for [`S3Storage`]
#[derive(Clone, Debug)]
pub struct S3StorageConfig {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, LocalStack)
    pub endpoint_url: Option<String>,
    pub credentials_present: bool,
    pub timeout: Duration,
}

impl S3StorageConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            bucket: BUCKET_NAME.to_string(),
            region: config.aws_region().to_string(),
            endpoint_url: config.s3_endpoint().map(String::from),
            credentials_present: config.has_aws_credentials(),
            timeout: config.remote_call_timeout(),
        }
    }
}

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    settings: S3StorageConfig,
}

impl S3Storage {
    /// Create a new S3Storage from an already loaded SDK configuration
    pub fn new(sdk_config: &SdkConfig, settings: S3StorageConfig) -> Self {
        let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);

        if let Some(ref endpoint) = settings.endpoint_url {
            // Path-style addressing is required by MinIO and LocalStack
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        tracing::info!(
            bucket = %settings.bucket,
            region = %settings.region,
            endpoint = ?settings.endpoint_url,
            credentials_present = settings.credentials_present,
            "S3 storage initialized"
        );

        S3Storage { client, settings }
    }

    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = load_sdk_config(config).await;
        Self::new(&sdk_config, S3StorageConfig::from_config(config))
    }

    /// Generate public URL for S3 object
    ///
    /// For AWS S3: `https://{bucket}.s3.{region}.amazonaws.com/{key}`.
    /// For S3-compatible providers: `{endpoint}/{bucket}/{key}`.
    pub fn object_url(&self, key: &str) -> String {
        object_url(
            &self.settings.bucket,
            &self.settings.region,
            self.settings.endpoint_url.as_deref(),
            key,
        )
    }

    fn ensure_credentials(&self) -> StorageResult<()> {
        if self.settings.credentials_present {
            Ok(())
        } else {
            Err(StorageError::MissingCredentials)
        }
    }

    /// Run one remote call under the configured timeout
    async fn bounded<T, E, R, F>(&self, operation: &'static str, fut: F) -> StorageResult<T>
    where
        F: Future<Output = Result<T, SdkError<E, R>>>,
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        match tokio::time::timeout(self.settings.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                let code = provider_code(&e);
                let message = DisplayErrorContext(&e).to_string();
                Err(classify_s3_error(
                    code.as_deref(),
                    &message,
                    &self.settings.bucket,
                ))
            }
            Err(_) => Err(StorageError::Unknown(format!(
                "S3 {} timed out after {:?}",
                operation, self.settings.timeout
            ))),
        }
    }
}

pub(crate) fn object_url(bucket: &str, region: &str, endpoint: Option<&str>, key: &str) -> String {
    match endpoint {
        Some(endpoint) => format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key),
        None => format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key),
    }
}

/// Map an S3 error code onto the storage failure taxonomy.
pub fn classify_s3_error(code: Option<&str>, message: &str, bucket: &str) -> StorageError {
    match code {
        Some(
            "InvalidAccessKeyId" | "SignatureDoesNotMatch" | "InvalidToken" | "ExpiredToken"
            | "CredentialsError",
        ) => StorageError::InvalidCredentials(message.to_string()),
        Some("NoSuchBucket") => StorageError::BucketNotFound(bucket.to_string()),
        Some("AccessDenied" | "AllAccessDisabled") => {
            StorageError::AccessDenied(message.to_string())
        }
        Some("NoSuchKey") => StorageError::NotFound(message.to_string()),
        _ => StorageError::Unknown(message.to_string()),
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn store(
        &self,
        key: &StoredObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<String> {
        self.ensure_credentials()?;

        let size = data.len() as u64;
        let start = Instant::now();

        let request = self
            .client
            .put_object()
            .bucket(&self.settings.bucket)
            .key(key.as_str())
            .body(ByteStream::from(data))
            .content_type(content_type)
            .acl(ObjectCannedAcl::Private)
            .send();

        self.bounded("upload", request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                kind = e.kind(),
                bucket = %self.settings.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            e
        })?;

        let url = self.object_url(key.as_str());

        tracing::info!(
            bucket = %self.settings.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(url)
    }

    async fn fetch(&self, key: &str) -> StorageResult<Bytes> {
        if !is_safe_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        self.ensure_credentials()?;

        let start = Instant::now();
        let request = self
            .client
            .get_object()
            .bucket(&self.settings.bucket)
            .key(key)
            .send();

        let response = self.bounded("download", request).await.map_err(|e| match e {
            StorageError::NotFound(_) => StorageError::NotFound(key.to_string()),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.settings.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 download failed"
                );
                other
            }
        })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Unknown(e.to_string()))?
            .into_bytes();

        tracing::info!(
            bucket = %self.settings.bucket,
            key = %key,
            size_bytes = data.len() as u64,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 download successful"
        );

        Ok(data)
    }

    async fn probe(&self) -> StorageResult<()> {
        self.ensure_credentials()?;

        let request = self
            .client
            .list_objects_v2()
            .bucket(&self.settings.bucket)
            .max_keys(1)
            .send();

        self.bounded("probe", request).await?;
        tracing::info!(bucket = %self.settings.bucket, "S3 bucket is accessible");
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }

    fn bucket(&self) -> &str {
        &self.settings.bucket
    }

    fn is_configured(&self) -> bool {
        self.settings.credentials_present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_config::BehaviorVersion;
    use aws_sdk_s3::config::http::HttpResponse;
    use aws_sdk_s3::operation::put_object::PutObjectError;

    fn settings(credentials_present: bool) -> S3StorageConfig {
        S3StorageConfig {
            bucket: "exam-bucket".to_string(),
            region: "eu-west-1".to_string(),
            endpoint_url: None,
            credentials_present,
            timeout: Duration::from_secs(5),
        }
    }

    fn offline_sdk_config() -> SdkConfig {
        SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(aws_config::Region::new("eu-west-1"))
            .build()
    }

    #[test]
    fn test_classify_credential_codes() {
        for code in [
            "InvalidAccessKeyId",
            "SignatureDoesNotMatch",
            "InvalidToken",
            "ExpiredToken",
            "CredentialsError",
        ] {
            let err = classify_s3_error(Some(code), "rejected", "b");
            assert!(matches!(err, StorageError::InvalidCredentials(_)), "{}", code);
        }
    }

    #[test]
    fn test_classify_bucket_and_access_codes() {
        match classify_s3_error(Some("NoSuchBucket"), "missing", "exam-bucket") {
            StorageError::BucketNotFound(bucket) => assert_eq!(bucket, "exam-bucket"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            classify_s3_error(Some("AccessDenied"), "denied", "b"),
            StorageError::AccessDenied(_)
        ));
        assert!(matches!(
            classify_s3_error(Some("AllAccessDisabled"), "disabled", "b"),
            StorageError::AccessDenied(_)
        ));
    }

    #[test]
    fn test_classify_unknown_keeps_message() {
        match classify_s3_error(Some("SlowDown"), "please reduce your request rate", "b") {
            StorageError::Unknown(msg) => assert_eq!(msg, "please reduce your request rate"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            classify_s3_error(None, "connection reset", "b"),
            StorageError::Unknown(_)
        ));
    }

    #[test]
    fn test_object_url_formats() {
        assert_eq!(
            object_url("exam-bucket", "eu-west-1", None, "uploads/1-a.png"),
            "https://exam-bucket.s3.eu-west-1.amazonaws.com/uploads/1-a.png"
        );
        assert_eq!(
            object_url("exam-bucket", "eu-west-1", Some("http://localhost:9000/"), "uploads/1-a.png"),
            "http://localhost:9000/exam-bucket/uploads/1-a.png"
        );
    }

    #[tokio::test]
    async fn test_store_without_credentials_fails_before_network() {
        let storage = S3Storage::new(&offline_sdk_config(), settings(false));
        let key = StoredObjectKey::new("uploads/1-a.png");

        let result = storage
            .store(&key, Bytes::from_static(b"png"), "image/png")
            .await;
        assert!(matches!(result, Err(StorageError::MissingCredentials)));
        assert!(!storage.is_configured());

        let result = storage.probe().await;
        assert!(matches!(result, Err(StorageError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_traversal_keys() {
        let storage = S3Storage::new(&offline_sdk_config(), settings(true));
        let result = storage.fetch("../secrets").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
        assert_eq!(storage.bucket(), "exam-bucket");
        assert_eq!(storage.backend_type(), StorageBackend::S3);
    }

    #[tokio::test]
    async fn test_stalled_call_times_out_as_unknown() {
        let storage = S3Storage::new(
            &offline_sdk_config(),
            S3StorageConfig {
                timeout: Duration::from_millis(10),
                ..settings(true)
            },
        );

        let stalled =
            std::future::pending::<Result<(), SdkError<PutObjectError, HttpResponse>>>();
        match storage.bounded("upload", stalled).await {
            Err(StorageError::Unknown(msg)) => {
                assert!(msg.starts_with("S3 upload"), "{}", msg);
                assert!(msg.contains("timed out"), "{}", msg);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}

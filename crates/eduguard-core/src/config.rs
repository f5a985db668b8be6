//! Configuration module
//!
//! Configuration is read once at startup from the process environment (a `.env` file is
//! honoured through `dotenvy`). Missing AWS credentials are not an error here: the server
//! starts and reports the failure per request.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::constants::{
    DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_AWS_REGION,
    DEFAULT_MAX_FILE_SIZE_MB,
};
use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 4000;
const REMOTE_CALL_TIMEOUT_SECS: u64 = 30;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Console log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub http_concurrency_limit: usize,
    pub log_format: LogFormat,
}

/// Static AWS credentials taken from the environment.
#[derive(Clone)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}

/// Upload constraints enforced at the HTTP boundary
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub max_file_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allowed_content_types: DEFAULT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Upload service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    pub aws_region: String,
    pub aws_credentials: Option<AwsCredentials>,
    // Custom endpoint for S3-compatible providers (MinIO, LocalStack)
    pub s3_endpoint: Option<String>,
    pub storage_backend: StorageBackend,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    pub upload: UploadConfig,
    pub remote_call_timeout_secs: u64,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    fn as_service(&self) -> &ServiceConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ServiceConfig::from_vars(var)?;
        config.validate()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_service().validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.as_service().base.environment)
    }

    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_service().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_service().base.http_concurrency_limit
    }

    pub fn log_format(&self) -> LogFormat {
        self.as_service().base.log_format
    }

    pub fn aws_region(&self) -> &str {
        &self.as_service().aws_region
    }

    pub fn aws_credentials(&self) -> Option<&AwsCredentials> {
        self.as_service().aws_credentials.as_ref()
    }

    pub fn has_aws_credentials(&self) -> bool {
        self.as_service().aws_credentials.is_some()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.as_service().s3_endpoint.as_deref()
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.as_service().storage_backend
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.as_service().local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.as_service().local_storage_base_url.as_deref()
    }

    pub fn upload(&self) -> &UploadConfig {
        &self.as_service().upload
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.as_service().upload.max_file_size_bytes
    }

    pub fn remote_call_timeout(&self) -> Duration {
        Duration::from_secs(self.as_service().remote_call_timeout_secs)
    }
}

fn is_production_name(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl ServiceConfig {
    fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|s| !s.trim().is_empty());

        let environment = non_empty("ENVIRONMENT")
            .or_else(|| non_empty("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins_str = non_empty("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_format = match non_empty("LOG_FORMAT").map(|s| s.to_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        let base = BaseConfig {
            server_port: non_empty("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            http_concurrency_limit: non_empty("HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
            log_format,
        };

        // Both halves are required; a lone key id is treated as no credentials at all.
        let aws_credentials = match (
            non_empty("AWS_ACCESS_KEY_ID"),
            non_empty("AWS_SECRET_ACCESS_KEY"),
        ) {
            (Some(access_key_id), Some(secret_access_key)) => Some(AwsCredentials {
                access_key_id,
                secret_access_key,
            }),
            _ => None,
        };

        let storage_backend = match non_empty("STORAGE_BACKEND") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let max_file_size_mb = non_empty("MAX_FILE_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let defaults = UploadConfig::default();
        let upload = UploadConfig {
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            allowed_extensions: non_empty("ALLOWED_EXTENSIONS")
                .map(|s| split_list(&s))
                .unwrap_or(defaults.allowed_extensions),
            allowed_content_types: non_empty("ALLOWED_CONTENT_TYPES")
                .map(|s| split_list(&s))
                .unwrap_or(defaults.allowed_content_types),
        };

        Ok(ServiceConfig {
            base,
            aws_region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            aws_credentials,
            s3_endpoint: non_empty("S3_ENDPOINT"),
            storage_backend,
            local_storage_path: non_empty("LOCAL_STORAGE_PATH"),
            local_storage_base_url: non_empty("LOCAL_STORAGE_BASE_URL"),
            upload,
            remote_call_timeout_secs: non_empty("REMOTE_CALL_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(REMOTE_CALL_TIMEOUT_SECS)
                .max(1),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if is_production_name(&self.base.environment)
            && self.base.cors_origins.iter().any(|o| o == "*")
        {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.upload.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than zero"));
        }

        if self.upload.allowed_extensions.is_empty() || self.upload.allowed_content_types.is_empty()
        {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS and ALLOWED_CONTENT_TYPES must not be empty"
            ));
        }

        if self.storage_backend == StorageBackend::Local {
            if self.local_storage_path.is_none() {
                return Err(anyhow::anyhow!(
                    "LOCAL_STORAGE_PATH must be set when using local storage backend"
                ));
            }
            if self.local_storage_base_url.is_none() {
                return Err(anyhow::anyhow!(
                    "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                ));
            }
        }

        Ok(())
    }
}

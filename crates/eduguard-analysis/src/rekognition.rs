//! AWS Rekognition backend for label and text detection

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rekognition::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_rekognition::types::{Image, Label, S3Object, TextDetection, TextTypes};
use aws_sdk_rekognition::Client as RekognitionClient;
use eduguard_core::aws::{load_sdk_config, provider_code};
use eduguard_core::models::{AnalysisResult, DetectedLabel, DetectedText, ObjectRef, TextKind};
use eduguard_core::Config;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::future::Future;
use std::time::Instant;

use crate::{AnalysisError, AnalysisOutput, AnalyzerConfig, ImageAnalyzer};

/// Rekognition-backed [`ImageAnalyzer`]
pub struct RekognitionAnalyzer {
    client: RekognitionClient,
    config: AnalyzerConfig,
    credentials_present: bool,
}

impl Debug for RekognitionAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RekognitionAnalyzer")
            .field("config", &self.config)
            .field("credentials_present", &self.credentials_present)
            .finish()
    }
}

impl RekognitionAnalyzer {
    pub fn new(sdk_config: &SdkConfig, config: AnalyzerConfig, credentials_present: bool) -> Self {
        Self {
            client: RekognitionClient::new(sdk_config),
            config,
            credentials_present,
        }
    }

    /// Create an analyzer for the configured region and credentials
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = load_sdk_config(config).await;
        let analyzer_config = AnalyzerConfig::default().with_timeout(config.remote_call_timeout());

        tracing::info!(
            region = %config.aws_region(),
            max_labels = analyzer_config.max_labels,
            min_confidence = analyzer_config.min_confidence,
            credentials_present = config.has_aws_credentials(),
            "Rekognition analyzer initialized"
        );

        Self::new(&sdk_config, analyzer_config, config.has_aws_credentials())
    }

    fn image_for(object: &ObjectRef) -> Image {
        Image::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&object.bucket)
                    .name(object.key.as_str())
                    .build(),
            )
            .build()
    }

    async fn bounded<T, E, R, F>(&self, operation: &'static str, fut: F) -> Result<T, AnalysisError>
    where
        F: Future<Output = Result<T, SdkError<E, R>>>,
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: Debug,
    {
        match tokio::time::timeout(self.config.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                let code = provider_code(&e);
                let message = DisplayErrorContext(&e).to_string();
                Err(classify_rekognition_error(code.as_deref(), &message))
            }
            Err(_) => Err(AnalysisError::Unknown(format!(
                "{} timed out after {:?}",
                operation, self.config.timeout
            ))),
        }
    }
}

/// Map a Rekognition error code onto the analysis failure taxonomy.
pub fn classify_rekognition_error(code: Option<&str>, message: &str) -> AnalysisError {
    match code {
        Some("AccessDeniedException") => AnalysisError::AccessDenied(message.to_string()),
        Some(
            "UnrecognizedClientException" | "InvalidSignatureException" | "ExpiredTokenException"
            | "CredentialsError",
        ) => AnalysisError::InvalidCredentials(message.to_string()),
        _ => AnalysisError::Unknown(message.to_string()),
    }
}

fn to_detected_label(label: &Label) -> Option<DetectedLabel> {
    Some(DetectedLabel {
        name: label.name()?.to_string(),
        confidence: label.confidence().unwrap_or(0.0),
        parents: label
            .parents()
            .iter()
            .filter_map(|parent| parent.name().map(String::from))
            .collect(),
    })
}

fn to_detected_text(detection: &TextDetection) -> Option<DetectedText> {
    Some(DetectedText {
        text: detection.detected_text()?.to_string(),
        confidence: detection.confidence().unwrap_or(0.0),
        kind: detection.r#type().and_then(|kind| match kind {
            TextTypes::Line => Some(TextKind::Line),
            TextTypes::Word => Some(TextKind::Word),
            _ => None,
        }),
        id: detection.id(),
        parent_id: detection.parent_id(),
    })
}

#[async_trait]
impl ImageAnalyzer for RekognitionAnalyzer {
    async fn analyze(&self, object: &ObjectRef) -> AnalysisOutput {
        if !self.credentials_present {
            return Err(AnalysisError::MissingCredentials);
        }

        let start = Instant::now();
        let image = Self::image_for(object);

        let labels_request = self
            .client
            .detect_labels()
            .image(image.clone())
            .max_labels(self.config.max_labels)
            .min_confidence(self.config.min_confidence)
            .send();
        let labels_response = self.bounded("DetectLabels", labels_request).await?;

        let text_request = self.client.detect_text().image(image).send();
        let text_response = self.bounded("DetectText", text_request).await?;

        let result = AnalysisResult {
            labels: labels_response
                .labels()
                .iter()
                .filter_map(to_detected_label)
                .collect(),
            texts: text_response
                .text_detections()
                .iter()
                .filter_map(to_detected_text)
                .collect(),
        };

        tracing::info!(
            bucket = %object.bucket,
            key = %object.key,
            labels_count = result.labels.len(),
            text_count = result.texts.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Rekognition analysis completed"
        );

        Ok(result)
    }

    fn is_configured(&self) -> bool {
        self.credentials_present
    }
}

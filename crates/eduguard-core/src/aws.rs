//! AWS SDK plumbing shared by the S3 and Rekognition backends

use crate::Config;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use std::fmt::Debug;

/// Load the AWS SDK configuration for `config`, with the environment credentials when
/// both halves are present.
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region().to_string()));

    if let Some(creds) = config.aws_credentials() {
        loader = loader.credentials_provider(Credentials::new(
            creds.access_key_id.clone(),
            creds.secret_access_key.clone(),
            None,
            None,
            "environment",
        ));
    }

    loader.load().await
}

/// Provider error code, falling back to `CredentialsError` when the SDK failed before
/// reaching AWS because of its credentials provider.
pub fn provider_code<E, R>(err: &SdkError<E, R>) -> Option<String>
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    if let Some(code) = err.code() {
        return Some(code.to_string());
    }
    match err {
        SdkError::ConstructionFailure(_) | SdkError::DispatchFailure(_) => {
            let text = DisplayErrorContext(err).to_string().to_lowercase();
            text.contains("credentials").then(|| "CredentialsError".to_string())
        }
        _ => None,
    }
}

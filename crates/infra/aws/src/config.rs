use aws_config::SdkConfig;
use aws_sdk_ec2::config::{Credentials as SdkCredentials, Region};
use ec2ctl_core::credentials::Credentials;

/// Assemble SDK configuration from the resolved bundle. Purely local: the
/// credentials are handed to the SDK as a static provider and verified on
/// the first real API call.
pub(super) async fn load_config(credentials: &Credentials) -> SdkConfig {
    let provider = SdkCredentials::new(
        credentials.access_key_id.clone(),
        credentials.secret_access_key.clone(),
        credentials.session_token.clone(),
        None,
        "ec2ctl-environment",
    );

    aws_config::from_env()
        .credentials_provider(provider)
        .region(Region::new(credentials.region.clone()))
        .load()
        .await
}

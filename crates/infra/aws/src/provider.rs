use async_trait::async_trait;
use aws_sdk_ec2::Client as Ec2Client;
use ec2ctl_core::cloud_provider::CloudProvider;
use ec2ctl_core::credentials::Credentials;
use ec2ctl_core::error::{CredentialsError, Result};
use ec2ctl_core::instance::{
    InstanceDescriptor, InstanceState, LaunchReceipt, LaunchRequest, StateChange,
};
use tracing::debug;

use crate::{config, instance};

/// EC2-backed provider. Holds the single client for the process lifetime; a
/// failed operation does not invalidate it.
pub struct AwsProvider {
    ec2_client: Ec2Client,
    region: String,
}

impl AwsProvider {
    /// Build the client from a resolved bundle. The bundle is re-checked
    /// here because construction is the last point before credentials reach
    /// the SDK. No network call is made.
    pub async fn new(credentials: &Credentials) -> Result<Self> {
        if credentials.access_key_id.is_empty() {
            return Err(CredentialsError::MissingField {
                field: "access key ID",
            }
            .into());
        }
        if credentials.secret_access_key.is_empty() {
            return Err(CredentialsError::MissingField {
                field: "secret access key",
            }
            .into());
        }

        let sdk_config = config::load_config(credentials).await;
        let ec2_client = Ec2Client::new(&sdk_config);
        debug!(region = %credentials.region, "EC2 client constructed");

        Ok(Self {
            ec2_client,
            region: credentials.region.clone(),
        })
    }
}

#[async_trait]
impl CloudProvider for AwsProvider {
    async fn describe_instances(
        &self,
        state: Option<InstanceState>,
    ) -> Result<Vec<InstanceDescriptor>> {
        instance::describe_instances(&self.ec2_client, state).await
    }

    async fn launch_instance(&self, request: &LaunchRequest) -> Result<LaunchReceipt> {
        instance::launch_instance(&self.ec2_client, request).await
    }

    async fn stop_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>> {
        instance::stop_instances(&self.ec2_client, instance_ids).await
    }

    async fn start_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>> {
        instance::start_instances(&self.ec2_client, instance_ids).await
    }

    async fn reboot_instances(&self, instance_ids: &[String]) -> Result<()> {
        instance::reboot_instances(&self.ec2_client, instance_ids).await
    }

    async fn terminate_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>> {
        instance::terminate_instances(&self.ec2_client, instance_ids).await
    }

    fn region_name(&self) -> &str {
        &self.region
    }
}

use async_trait::async_trait;

use crate::error::Result;
use crate::instance::{InstanceDescriptor, InstanceState, LaunchReceipt, LaunchRequest, StateChange};

/// Seam between the operations layer and the provider SDK. Lifecycle calls
/// report acceptance by the API, not convergence to the target state.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Describe instances, optionally scoped to a single lifecycle state.
    async fn describe_instances(
        &self,
        state: Option<InstanceState>,
    ) -> Result<Vec<InstanceDescriptor>>;

    /// Launch exactly one instance and apply its Name tag best-effort.
    async fn launch_instance(&self, request: &LaunchRequest) -> Result<LaunchReceipt>;

    async fn stop_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>>;

    async fn start_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>>;

    /// Reboot returns no per-instance payload; success means the request was
    /// accepted for the whole batch.
    async fn reboot_instances(&self, instance_ids: &[String]) -> Result<()>;

    async fn terminate_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>>;

    fn region_name(&self) -> &str;
}

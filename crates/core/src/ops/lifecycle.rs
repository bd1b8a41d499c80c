use tracing::debug;

use crate::cloud_provider::CloudProvider;
use crate::error::{Result, ValidationError};
use crate::instance::StateChange;

/// Result of a termination request: either declined locally or accepted by
/// the API with its per-instance transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminateOutcome {
    Cancelled,
    Accepted(Vec<StateChange>),
}

/// Stop the given instances with one batched call.
pub async fn stop_instances(
    provider: &dyn CloudProvider,
    instance_ids: &[String],
) -> Result<Vec<StateChange>> {
    ensure_ids(instance_ids)?;
    debug!(count = instance_ids.len(), "stopping instances");
    provider.stop_instances(instance_ids).await
}

/// Start the given instances with one batched call.
pub async fn start_instances(
    provider: &dyn CloudProvider,
    instance_ids: &[String],
) -> Result<Vec<StateChange>> {
    ensure_ids(instance_ids)?;
    debug!(count = instance_ids.len(), "starting instances");
    provider.start_instances(instance_ids).await
}

/// Reboot the given instances with one batched call.
pub async fn reboot_instances(provider: &dyn CloudProvider, instance_ids: &[String]) -> Result<()> {
    ensure_ids(instance_ids)?;
    debug!(count = instance_ids.len(), "rebooting instances");
    provider.reboot_instances(instance_ids).await
}

/// Terminate the given instances. The remote call is issued if and only if
/// `confirmed` is true; declining is a no-op, not an error.
pub async fn terminate_instances(
    provider: &dyn CloudProvider,
    instance_ids: &[String],
    confirmed: bool,
) -> Result<TerminateOutcome> {
    ensure_ids(instance_ids)?;
    if !confirmed {
        debug!("termination declined");
        return Ok(TerminateOutcome::Cancelled);
    }
    debug!(count = instance_ids.len(), "terminating instances");
    let changes = provider.terminate_instances(instance_ids).await?;
    Ok(TerminateOutcome::Accepted(changes))
}

fn ensure_ids(instance_ids: &[String]) -> Result<()> {
    if instance_ids.is_empty() {
        return Err(ValidationError::EmptyIdList.into());
    }
    Ok(())
}

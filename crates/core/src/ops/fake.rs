use std::sync::Mutex;

use async_trait::async_trait;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::instance::{InstanceDescriptor, InstanceState, LaunchReceipt, LaunchRequest, StateChange};

/// In-memory provider recording every call, for operation tests.
#[derive(Default)]
pub(crate) struct FakeProvider {
    pub(crate) instances: Vec<InstanceDescriptor>,
    pub(crate) describe_calls: Mutex<Vec<Option<InstanceState>>>,
    pub(crate) launch_calls: Mutex<Vec<LaunchRequest>>,
    pub(crate) stop_calls: Mutex<Vec<Vec<String>>>,
    pub(crate) start_calls: Mutex<Vec<Vec<String>>>,
    pub(crate) reboot_calls: Mutex<Vec<Vec<String>>>,
    pub(crate) terminate_calls: Mutex<Vec<Vec<String>>>,
}

impl FakeProvider {
    pub(crate) fn with_instances(instances: Vec<InstanceDescriptor>) -> Self {
        Self {
            instances,
            ..Self::default()
        }
    }
}

pub(crate) fn descriptor(id: &str, state: InstanceState) -> InstanceDescriptor {
    InstanceDescriptor {
        id: id.to_string(),
        name: None,
        instance_type: "t2.micro".to_string(),
        state,
        public_ip: None,
        private_ip: None,
        availability_zone: "us-east-1a".to_string(),
    }
}

fn transition(
    instance_ids: &[String],
    previous: InstanceState,
    current: InstanceState,
) -> Vec<StateChange> {
    instance_ids
        .iter()
        .map(|id| StateChange {
            instance_id: id.clone(),
            previous_state: Some(previous),
            current_state: Some(current),
        })
        .collect()
}

#[async_trait]
impl CloudProvider for FakeProvider {
    async fn describe_instances(
        &self,
        state: Option<InstanceState>,
    ) -> Result<Vec<InstanceDescriptor>> {
        self.describe_calls.lock().unwrap().push(state);
        Ok(self
            .instances
            .iter()
            .filter(|instance| state.is_none_or(|wanted| instance.state == wanted))
            .cloned()
            .collect())
    }

    async fn launch_instance(&self, request: &LaunchRequest) -> Result<LaunchReceipt> {
        self.launch_calls.lock().unwrap().push(request.clone());
        Ok(LaunchReceipt {
            instance_id: "i-0fake1234".to_string(),
            tag_applied: true,
        })
    }

    async fn stop_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>> {
        self.stop_calls.lock().unwrap().push(instance_ids.to_vec());
        Ok(transition(
            instance_ids,
            InstanceState::Running,
            InstanceState::Stopping,
        ))
    }

    async fn start_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>> {
        self.start_calls.lock().unwrap().push(instance_ids.to_vec());
        Ok(transition(
            instance_ids,
            InstanceState::Stopped,
            InstanceState::Pending,
        ))
    }

    async fn reboot_instances(&self, instance_ids: &[String]) -> Result<()> {
        self.reboot_calls
            .lock()
            .unwrap()
            .push(instance_ids.to_vec());
        Ok(())
    }

    async fn terminate_instances(&self, instance_ids: &[String]) -> Result<Vec<StateChange>> {
        self.terminate_calls
            .lock()
            .unwrap()
            .push(instance_ids.to_vec());
        Ok(transition(
            instance_ids,
            InstanceState::Running,
            InstanceState::ShuttingDown,
        ))
    }

    fn region_name(&self) -> &str {
        "us-east-1"
    }
}

use aws_sdk_ec2::Client as Ec2Client;
use aws_sdk_ec2::types::{Filter, Instance, InstanceStateChange, InstanceType, Tag};
use ec2ctl_core::error::{Error, Result};
use ec2ctl_core::instance::{
    InstanceDescriptor, InstanceState, LaunchReceipt, LaunchRequest, StateChange,
};
use tracing::warn;

use crate::aws_error::map_aws_error;

const STATE_FILTER_NAME: &str = "instance-state-name";
const NAME_TAG_KEY: &str = "Name";

pub(super) async fn describe_instances(
    client: &Ec2Client,
    state: Option<InstanceState>,
) -> Result<Vec<InstanceDescriptor>> {
    let mut request = client.describe_instances();
    if let Some(state) = state {
        request = request.filters(
            Filter::builder()
                .name(STATE_FILTER_NAME)
                .values(state.as_str())
                .build(),
        );
    }

    let resp = request
        .send()
        .await
        .map_err(|error| map_aws_error("DescribeInstances", error))?;

    Ok(resp
        .reservations()
        .iter()
        .flat_map(|reservation| reservation.instances())
        .filter_map(descriptor_from_instance)
        .collect())
}

/// Shape one wire instance into a descriptor. Instances missing an ID,
/// state, or type are skipped rather than failing the whole listing.
fn descriptor_from_instance(instance: &Instance) -> Option<InstanceDescriptor> {
    let id = instance.instance_id()?.to_string();
    let state = instance
        .state()
        .and_then(|state| state.name())
        .and_then(|name| name.as_str().parse::<InstanceState>().ok())?;
    let instance_type = instance.instance_type()?.as_str().to_string();

    let name = instance.tags().iter().find_map(|tag| {
        tag.key()
            .filter(|key| *key == NAME_TAG_KEY)
            .and_then(|_| tag.value().map(ToString::to_string))
    });

    let availability_zone = instance
        .placement()
        .and_then(|placement| placement.availability_zone())
        .unwrap_or_default()
        .to_string();

    Some(InstanceDescriptor {
        id,
        name,
        instance_type,
        state,
        public_ip: instance.public_ip_address().map(ToString::to_string),
        private_ip: instance.private_ip_address().map(ToString::to_string),
        availability_zone,
    })
}

pub(super) async fn launch_instance(
    client: &Ec2Client,
    request: &LaunchRequest,
) -> Result<LaunchReceipt> {
    let resp = client
        .run_instances()
        .image_id(&request.ami_id)
        .instance_type(InstanceType::from(request.instance_type.as_str()))
        .key_name(&request.key_pair_name)
        .min_count(1)
        .max_count(1)
        .send()
        .await
        .map_err(|error| map_aws_error("RunInstances", error))?;

    let instance_id = resp
        .instances()
        .first()
        .and_then(|instance| instance.instance_id())
        .ok_or_else(|| Error::Unknown {
            operation_name: "RunInstances".to_string(),
            detail: "response contained no instance ID".to_string(),
        })?
        .to_string();

    // Tagging is a second, best-effort call; a failure here never rolls back
    // the instance that was just created.
    let tag_applied = match client
        .create_tags()
        .resources(&instance_id)
        .tags(
            Tag::builder()
                .key(NAME_TAG_KEY)
                .value(&request.name_tag)
                .build(),
        )
        .send()
        .await
    {
        Ok(_) => true,
        Err(error) => {
            warn!(
                instance_id = %instance_id,
                error = %map_aws_error("CreateTags", error),
                "failed to apply Name tag"
            );
            false
        }
    };

    Ok(LaunchReceipt {
        instance_id,
        tag_applied,
    })
}

pub(super) async fn stop_instances(
    client: &Ec2Client,
    instance_ids: &[String],
) -> Result<Vec<StateChange>> {
    let resp = client
        .stop_instances()
        .set_instance_ids(Some(instance_ids.to_vec()))
        .send()
        .await
        .map_err(|error| map_aws_error("StopInstances", error))?;

    Ok(state_changes(resp.stopping_instances()))
}

pub(super) async fn start_instances(
    client: &Ec2Client,
    instance_ids: &[String],
) -> Result<Vec<StateChange>> {
    let resp = client
        .start_instances()
        .set_instance_ids(Some(instance_ids.to_vec()))
        .send()
        .await
        .map_err(|error| map_aws_error("StartInstances", error))?;

    Ok(state_changes(resp.starting_instances()))
}

pub(super) async fn reboot_instances(client: &Ec2Client, instance_ids: &[String]) -> Result<()> {
    client
        .reboot_instances()
        .set_instance_ids(Some(instance_ids.to_vec()))
        .send()
        .await
        .map_err(|error| map_aws_error("RebootInstances", error))?;

    Ok(())
}

pub(super) async fn terminate_instances(
    client: &Ec2Client,
    instance_ids: &[String],
) -> Result<Vec<StateChange>> {
    let resp = client
        .terminate_instances()
        .set_instance_ids(Some(instance_ids.to_vec()))
        .send()
        .await
        .map_err(|error| map_aws_error("TerminateInstances", error))?;

    Ok(state_changes(resp.terminating_instances()))
}

fn state_changes(changes: &[InstanceStateChange]) -> Vec<StateChange> {
    changes
        .iter()
        .filter_map(|change| {
            Some(StateChange {
                instance_id: change.instance_id()?.to_string(),
                previous_state: parse_state(change.previous_state()),
                current_state: parse_state(change.current_state()),
            })
        })
        .collect()
}

fn parse_state(state: Option<&aws_sdk_ec2::types::InstanceState>) -> Option<InstanceState> {
    state
        .and_then(|state| state.name())
        .and_then(|name| name.as_str().parse::<InstanceState>().ok())
}

use ec2ctl_core::error::Error;
use ec2ctl_core::instance::{InstanceDescriptor, InstanceState, LaunchReceipt, StateChange};

pub fn print_instances(instances: &[InstanceDescriptor], state_label: Option<&str>) {
    if instances.is_empty() {
        match state_label {
            Some(state) => println!("No instances found in state: {state}"),
            None => println!("No instances found in this account or region."),
        }
        return;
    }

    match state_label {
        Some(state) => println!("Instances with state: {state}"),
        None => println!("All instances"),
    }
    println!(
        "{:<20} {:<16} {:<14} {:<12} {:<16} {:<16} {}",
        "ID", "NAME", "STATE", "TYPE", "PUBLIC IP", "PRIVATE IP", "AZ"
    );
    for instance in instances {
        println!(
            "{:<20} {:<16} {:<14} {:<12} {:<16} {:<16} {}",
            instance.id,
            instance.name.as_deref().unwrap_or("-"),
            instance.state,
            instance.instance_type,
            instance.public_ip.as_deref().unwrap_or("-"),
            instance.private_ip.as_deref().unwrap_or("-"),
            instance.availability_zone,
        );
    }
}

pub fn print_receipt(receipt: &LaunchReceipt) {
    println!("Instance created with ID: {}", receipt.instance_id);
    if !receipt.tag_applied {
        println!("Note: the Name tag could not be applied; the instance was still created.");
    }
}

pub fn print_state_changes(verb: &str, changes: &[StateChange]) {
    if changes.is_empty() {
        println!("{verb} request accepted.");
        return;
    }
    for change in changes {
        println!(
            "{verb} request accepted for {}: {} -> {}",
            change.instance_id,
            state_label(change.previous_state),
            state_label(change.current_state),
        );
    }
}

fn state_label(state: Option<InstanceState>) -> String {
    state.map_or_else(|| "unknown".to_string(), |state| state.to_string())
}

pub fn print_error(error: &Error) {
    match error {
        Error::Validation(validation) => println!("Invalid input: {validation}"),
        Error::Remote(remote) => println!("AWS error: {remote}"),
        other => println!("Error: {other}"),
    }
}

//! Blocking interactive loop. Deliberately thin: selection labels, state
//! transitions, and every validation live in `ec2ctl_core` where they are
//! tested; this module only prompts, dispatches, and prints.

use ec2ctl_core::cloud_provider::CloudProvider;
use ec2ctl_core::error::Result;
use ec2ctl_core::instance::{InstanceState, parse_instance_ids};
use ec2ctl_core::ops::{self, TerminateOutcome};
use ec2ctl_core::shell::{MenuAction, ShellState, next_state};
use inquire::{Confirm, InquireError, Select, Text};

use crate::output;

pub async fn run(provider: &dyn CloudProvider) {
    println!("Cloud Instance Manager ({})", provider.region_name());

    loop {
        let Some(action) = select_action() else {
            println!("Exiting.");
            return;
        };

        if let Err(error) = dispatch(provider, action).await {
            output::print_error(&error);
        }

        match next_state(action) {
            ShellState::AwaitingSelection => {}
            ShellState::Terminated => {
                println!("Goodbye!");
                return;
            }
        }
    }
}

fn select_action() -> Option<MenuAction> {
    match Select::new("Select an action:", MenuAction::ALL.to_vec()).prompt() {
        Ok(action) => Some(action),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => None,
        Err(error) => {
            eprintln!("Input error: {error}");
            None
        }
    }
}

async fn dispatch(provider: &dyn CloudProvider, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::ListAll => list_all(provider).await,
        MenuAction::FilterByState => filter_by_state(provider).await,
        MenuAction::Launch => launch(provider).await,
        MenuAction::Stop => stop(provider).await,
        MenuAction::Start => start(provider).await,
        MenuAction::Reboot => reboot(provider).await,
        MenuAction::Terminate => terminate(provider).await,
        MenuAction::Exit => Ok(()),
    }
}

async fn list_all(provider: &dyn CloudProvider) -> Result<()> {
    let instances = ops::list_instances(provider).await?;
    output::print_instances(&instances, None);
    Ok(())
}

async fn filter_by_state(provider: &dyn CloudProvider) -> Result<()> {
    let states: Vec<&str> = InstanceState::ALL.iter().map(|state| state.as_str()).collect();
    println!("Valid states: {}", states.join(", "));

    let Some(raw) = prompt_text("State to filter by:") else {
        return Ok(());
    };
    let instances = ops::filter_instances_by_state(provider, &raw).await?;
    output::print_instances(&instances, Some(raw.trim()));
    Ok(())
}

async fn launch(provider: &dyn CloudProvider) -> Result<()> {
    println!("Tip: t2.micro and t3.micro are Free Tier eligible.");

    let Some(ami_id) = prompt_text("AMI ID:") else {
        return Ok(());
    };
    let Some(instance_type) = prompt_text("Instance type:") else {
        return Ok(());
    };
    let Some(key_pair_name) = prompt_text("Key pair name:") else {
        return Ok(());
    };
    let Some(name_tag) = prompt_text("Name tag:") else {
        return Ok(());
    };

    let receipt =
        ops::launch_instance(provider, &ami_id, &instance_type, &key_pair_name, &name_tag).await?;
    output::print_receipt(&receipt);
    Ok(())
}

async fn stop(provider: &dyn CloudProvider) -> Result<()> {
    let Some(raw) = prompt_text("Instance IDs to stop (comma-separated):") else {
        return Ok(());
    };
    let ids = parse_instance_ids(&raw)?;
    let changes = ops::stop_instances(provider, &ids).await?;
    output::print_state_changes("Stop", &changes);
    Ok(())
}

async fn start(provider: &dyn CloudProvider) -> Result<()> {
    let Some(raw) = prompt_text("Instance IDs to start (comma-separated):") else {
        return Ok(());
    };
    let ids = parse_instance_ids(&raw)?;
    let changes = ops::start_instances(provider, &ids).await?;
    output::print_state_changes("Start", &changes);
    Ok(())
}

async fn reboot(provider: &dyn CloudProvider) -> Result<()> {
    let Some(raw) = prompt_text("Instance IDs to reboot (comma-separated):") else {
        return Ok(());
    };
    let ids = parse_instance_ids(&raw)?;
    ops::reboot_instances(provider, &ids).await?;
    println!("Reboot request accepted for: {}", ids.join(", "));
    Ok(())
}

async fn terminate(provider: &dyn CloudProvider) -> Result<()> {
    let Some(raw) = prompt_text("Instance IDs to terminate (comma-separated):") else {
        return Ok(());
    };
    let ids = parse_instance_ids(&raw)?;

    println!("WARNING: terminated instances cannot be recovered.");
    let confirmed = prompt_confirmation(&format!("Terminate {}?", ids.join(", ")));

    match ops::terminate_instances(provider, &ids, confirmed).await? {
        TerminateOutcome::Cancelled => println!("Termination cancelled."),
        TerminateOutcome::Accepted(changes) => output::print_state_changes("Terminate", &changes),
    }
    Ok(())
}

/// Prompt for one line of input; `None` means the user cancelled and the
/// current menu iteration should be abandoned.
fn prompt_text(message: &str) -> Option<String> {
    match Text::new(message).prompt() {
        Ok(value) => Some(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => None,
        Err(error) => {
            eprintln!("Input error: {error}");
            None
        }
    }
}

fn prompt_confirmation(message: &str) -> bool {
    match Confirm::new(message).with_default(false).prompt() {
        Ok(answer) => answer,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => false,
        Err(error) => {
            eprintln!("Input error: {error}");
            false
        }
    }
}

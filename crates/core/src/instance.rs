use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result, ValidationError};

/// Lifecycle states an EC2 instance can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
}

impl InstanceState {
    pub const ALL: [InstanceState; 6] = [
        InstanceState::Pending,
        InstanceState::Running,
        InstanceState::ShuttingDown,
        InstanceState::Terminated,
        InstanceState::Stopping,
        InstanceState::Stopped,
    ];

    /// Wire name used by the EC2 API (`instance-state-name` filter values).
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceState::Pending => "pending",
            InstanceState::Running => "running",
            InstanceState::ShuttingDown => "shutting-down",
            InstanceState::Terminated => "terminated",
            InstanceState::Stopping => "stopping",
            InstanceState::Stopped => "stopped",
        }
    }
}

impl Display for InstanceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstanceState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(InstanceState::Pending),
            "running" => Ok(InstanceState::Running),
            "shutting-down" => Ok(InstanceState::ShuttingDown),
            "terminated" => Ok(InstanceState::Terminated),
            "stopping" => Ok(InstanceState::Stopping),
            "stopped" => Ok(InstanceState::Stopped),
            other => Err(ValidationError::UnknownState {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// Display-ready summary of one remote instance. Shaped per response,
/// printed, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    pub id: String,
    pub name: Option<String>,
    pub instance_type: String,
    pub state: InstanceState,
    pub public_ip: Option<String>,
    pub private_ip: Option<String>,
    pub availability_zone: String,
}

/// Validated parameters for launching a single instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub ami_id: String,
    pub instance_type: String,
    pub key_pair_name: String,
    pub name_tag: String,
}

impl LaunchRequest {
    /// Trims every field and rejects empty ones before anything reaches the
    /// remote API.
    pub fn new(
        ami_id: &str,
        instance_type: &str,
        key_pair_name: &str,
        name_tag: &str,
    ) -> Result<Self> {
        Ok(Self {
            ami_id: non_empty("AMI ID", ami_id)?,
            instance_type: non_empty("instance type", instance_type)?,
            key_pair_name: non_empty("key pair name", key_pair_name)?,
            name_tag: non_empty("name tag", name_tag)?,
        })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field }.into());
    }
    Ok(trimmed.to_string())
}

/// Outcome of a launch: the new instance ID plus whether the Name tag call
/// succeeded (tagging is best-effort and never rolls back the instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub instance_id: String,
    pub tag_applied: bool,
}

/// Per-instance transition echoed by stop/start/terminate responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub instance_id: String,
    pub previous_state: Option<InstanceState>,
    pub current_state: Option<InstanceState>,
}

/// Parse a comma-separated list of instance IDs. Order is preserved and
/// duplicates are kept; the remote API attaches no meaning to either.
pub fn parse_instance_ids(input: &str) -> Result<Vec<String>> {
    let ids: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect();

    if ids.is_empty() {
        return Err(ValidationError::EmptyIdList.into());
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_all_wire_names() {
        for state in InstanceState::ALL {
            assert_eq!(state.as_str().parse::<InstanceState>().unwrap(), state);
        }
    }

    #[test]
    fn state_parse_normalizes_case_and_whitespace() {
        assert_eq!(
            "  Shutting-Down ".parse::<InstanceState>().unwrap(),
            InstanceState::ShuttingDown
        );
    }

    #[test]
    fn state_parse_rejects_unknown_values() {
        let error = "paused".parse::<InstanceState>().unwrap_err();
        assert!(matches!(
            error,
            Error::Validation(ValidationError::UnknownState { .. })
        ));
    }

    #[test]
    fn launch_request_trims_fields() {
        let request = LaunchRequest::new(" ami-123 ", "t2.micro", " mykey", "web-1 ").unwrap();
        assert_eq!(request.ami_id, "ami-123");
        assert_eq!(request.key_pair_name, "mykey");
        assert_eq!(request.name_tag, "web-1");
    }

    #[test]
    fn launch_request_rejects_empty_fields() {
        for (ami, ty, key, name) in [
            ("", "t2.micro", "mykey", "web-1"),
            ("ami-123", "  ", "mykey", "web-1"),
            ("ami-123", "t2.micro", "", "web-1"),
            ("ami-123", "t2.micro", "mykey", ""),
        ] {
            let error = LaunchRequest::new(ami, ty, key, name).unwrap_err();
            assert!(matches!(
                error,
                Error::Validation(ValidationError::EmptyField { .. })
            ));
        }
    }

    #[test]
    fn id_parsing_preserves_order_and_trims() {
        let ids = parse_instance_ids(" i-aaa , i-bbb,,i-aaa ").unwrap();
        assert_eq!(ids, vec!["i-aaa", "i-bbb", "i-aaa"]);
    }

    #[test]
    fn id_parsing_rejects_blank_input() {
        for input in ["", "  ", ",,", " , "] {
            let error = parse_instance_ids(input).unwrap_err();
            assert!(matches!(
                error,
                Error::Validation(ValidationError::EmptyIdList)
            ));
        }
    }
}

use tracing::debug;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::instance::{InstanceDescriptor, InstanceState};

/// Describe every instance in the account/region, in the order the API
/// returns them.
pub async fn list_instances(provider: &dyn CloudProvider) -> Result<Vec<InstanceDescriptor>> {
    debug!("describing all instances");
    provider.describe_instances(None).await
}

/// Describe only instances in the given state. An unrecognized state is a
/// local validation failure; no remote call is made.
pub async fn filter_instances_by_state(
    provider: &dyn CloudProvider,
    raw_state: &str,
) -> Result<Vec<InstanceDescriptor>> {
    let state: InstanceState = raw_state.parse()?;
    debug!(state = %state, "describing instances by state");
    provider.describe_instances(Some(state)).await
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::error::{Error, ValidationError};
    use crate::ops::fake::{FakeProvider, descriptor};

    #[tokio::test]
    async fn list_returns_instances_in_api_order() {
        let provider = FakeProvider::with_instances(vec![
            descriptor("i-bbb", InstanceState::Running),
            descriptor("i-aaa", InstanceState::Stopped),
        ]);

        let instances = list_instances(&provider).await.unwrap();

        assert_eq!(instances[0].id, "i-bbb");
        assert_eq!(instances[1].id, "i-aaa");
        assert_eq!(*provider.describe_calls.lock().unwrap(), vec![None]);
    }

    #[tokio::test]
    async fn list_twice_is_set_equal_against_unchanged_remote() {
        let provider = FakeProvider::with_instances(vec![
            descriptor("i-aaa", InstanceState::Running),
            descriptor("i-bbb", InstanceState::Stopped),
        ]);

        let first: BTreeSet<String> = list_instances(&provider)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        let second: BTreeSet<String> = list_instances(&provider)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn filter_scopes_the_describe_call_to_the_state() {
        let provider = FakeProvider::with_instances(vec![
            descriptor("i-aaa", InstanceState::Running),
            descriptor("i-bbb", InstanceState::Running),
            descriptor("i-ccc", InstanceState::Stopped),
        ]);

        let instances = filter_instances_by_state(&provider, "running").await.unwrap();

        let ids: Vec<&str> = instances.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i-aaa", "i-bbb"]);
        assert_eq!(
            *provider.describe_calls.lock().unwrap(),
            vec![Some(InstanceState::Running)]
        );
    }

    #[tokio::test]
    async fn filter_accepts_mixed_case_input() {
        let provider = FakeProvider::with_instances(vec![descriptor(
            "i-aaa",
            InstanceState::ShuttingDown,
        )]);

        let instances = filter_instances_by_state(&provider, "Shutting-Down")
            .await
            .unwrap();

        assert_eq!(instances.len(), 1);
    }

    #[tokio::test]
    async fn filter_with_unknown_state_makes_no_remote_call() {
        let provider = FakeProvider::default();

        let error = filter_instances_by_state(&provider, "paused")
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            Error::Validation(ValidationError::UnknownState { .. })
        ));
        assert!(provider.describe_calls.lock().unwrap().is_empty());
    }
}

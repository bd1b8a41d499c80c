use tracing::debug;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::instance::{LaunchReceipt, LaunchRequest};

/// Launch one instance from the given AMI. All four fields must be non-empty
/// after trimming; a validation failure aborts before any remote call.
pub async fn launch_instance(
    provider: &dyn CloudProvider,
    ami_id: &str,
    instance_type: &str,
    key_pair_name: &str,
    name_tag: &str,
) -> Result<LaunchReceipt> {
    let request = LaunchRequest::new(ami_id, instance_type, key_pair_name, name_tag)?;
    debug!(ami_id = %request.ami_id, instance_type = %request.instance_type, "launching instance");
    provider.launch_instance(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};
    use crate::ops::fake::FakeProvider;

    #[tokio::test]
    async fn launch_records_validated_request() {
        let provider = FakeProvider::default();

        let receipt = launch_instance(&provider, " ami-123 ", "t2.micro", "mykey", "web-1")
            .await
            .unwrap();

        assert_eq!(receipt.instance_id, "i-0fake1234");
        assert!(receipt.tag_applied);
        let calls = provider.launch_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].ami_id, "ami-123");
        assert_eq!(calls[0].name_tag, "web-1");
    }

    #[tokio::test]
    async fn launch_with_empty_field_makes_no_remote_call() {
        let provider = FakeProvider::default();

        let error = launch_instance(&provider, "ami-123", "t2.micro", "  ", "web-1")
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            Error::Validation(ValidationError::EmptyField {
                field: "key pair name"
            })
        ));
        assert!(provider.launch_calls.lock().unwrap().is_empty());
    }
}

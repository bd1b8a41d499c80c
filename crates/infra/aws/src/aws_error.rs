use aws_sdk_ec2::error::{ProvideErrorMetadata, SdkError};
use ec2ctl_core::error::{Error, RemoteApiError};

/// Map an SDK failure into the closed error taxonomy. Service responses keep
/// the provider's own code and message verbatim; dispatch and timeout
/// failures become transport errors.
pub(super) fn map_aws_error<E>(operation_name: &'static str, sdk_error: SdkError<E>) -> Error
where
    E: std::error::Error + Send + Sync + 'static + ProvideErrorMetadata,
{
    match sdk_error {
        SdkError::ServiceError(service_error) => {
            let error = service_error.into_err();
            Error::Remote(RemoteApiError {
                operation_name: operation_name.to_string(),
                code: error.code().unwrap_or("Unknown").to_string(),
                message: error.message().unwrap_or_default().to_string(),
            })
        }

        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => Error::Transport {
            operation_name: operation_name.to_string(),
        },

        other => Error::Unknown {
            operation_name: operation_name.to_string(),
            detail: other.to_string(),
        },
    }
}

use thiserror::Error;

/// Error response returned by the provider API, surfaced verbatim.
#[derive(Debug, Error)]
#[error("{operation_name} rejected by the provider: {code}: {message}")]
pub struct RemoteApiError {
    pub operation_name: String,
    pub code: String,
    pub message: String,
}

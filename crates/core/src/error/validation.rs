use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error(
        "unknown instance state `{value}` (expected one of: pending, running, shutting-down, terminated, stopping, stopped)"
    )]
    UnknownState { value: String },

    #[error("no instance IDs provided")]
    EmptyIdList,
}

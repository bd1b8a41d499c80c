use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("credential bundle is missing {field}")]
    MissingField { field: &'static str },
}

mod config;
mod credentials;
mod remote;
mod validation;

pub use config::ConfigurationError;
pub use credentials::CredentialsError;
pub use remote::RemoteApiError;
use thiserror::Error;
pub use validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteApiError),

    #[error("transport failure during {operation_name}")]
    Transport { operation_name: String },

    #[error("unexpected error during {operation_name}: {detail}")]
    Unknown {
        operation_name: String,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

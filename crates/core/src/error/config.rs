use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("missing required credential: set {variable} in the environment or a .env file")]
    MissingCredential { variable: &'static str },
}

use std::env;

use crate::error::{ConfigurationError, Result};

pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";
pub const REGION_VAR: &str = "AWS_DEFAULT_REGION";

pub const DEFAULT_REGION: &str = "us-east-1";

/// The credential bundle resolved once at startup and threaded through the
/// provider for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
}

impl Credentials {
    pub fn resolve_from_env() -> Result<Self> {
        Self::resolve(|name| env::var(name).ok())
    }

    /// Resolve the bundle through an injected lookup so tests can supply an
    /// environment map instead of mutating process state.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let access_key_id = required(&lookup, ACCESS_KEY_VAR)?;
        let secret_access_key = required(&lookup, SECRET_KEY_VAR)?;
        let session_token = optional(&lookup, SESSION_TOKEN_VAR);
        let region = optional(&lookup, REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token,
            region,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, variable: &'static str) -> Result<String> {
    optional(lookup, variable)
        .ok_or_else(|| ConfigurationError::MissingCredential { variable }.into())
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, variable: &str) -> Option<String> {
    lookup(variable)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

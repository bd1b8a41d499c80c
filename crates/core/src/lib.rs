pub mod cloud_provider;
pub mod credentials;
pub mod error;
pub mod instance;
pub mod ops;
pub mod shell;

//! Credential provider implementations

mod env_provider;
mod static_provider;

pub use env_provider::{env_var_for, EnvCredentialProvider, API_KEY_SUFFIX};
pub use static_provider::StaticCredentialProvider;

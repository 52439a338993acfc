use async_trait::async_trait;
use std::env;

use crate::domain::{Credential, CredentialProvider, DomainError};

/// Suffix appended to the upper-cased provider identifier
pub const API_KEY_SUFFIX: &str = "_API_KEY";

/// Environment variable holding the key for a provider, e.g. `OPENAI_API_KEY`
pub fn env_var_for(provider: &str) -> String {
    format!("{}{}", provider.to_uppercase(), API_KEY_SUFFIX)
}

/// Credential provider that reads from environment variables on every call
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    prefix: Option<String>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a fixed prefix to every variable name (`<PREFIX>OPENAI_API_KEY`)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    fn var_name(&self, provider: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, env_var_for(provider)),
            None => env_var_for(provider),
        }
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(&self, provider: &str) -> Result<Credential, DomainError> {
        let var = self.var_name(provider);

        match env::var(&var) {
            Ok(api_key) if !api_key.is_empty() => Ok(Credential::new(provider, api_key)),
            _ => {
                tracing::debug!(provider = %provider, env_var = %var, "API key not set");
                Err(DomainError::credential(format!(
                    "API key for {} not found",
                    provider
                )))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}

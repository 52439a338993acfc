use async_trait::async_trait;
use std::fmt::Debug;

use super::Credential;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Resolves the credential for a provider at call time
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialProvider: Send + Sync + Debug {
    /// Get the credential for a provider identifier (e.g. `openai`)
    ///
    /// A missing credential is reported as `DomainError::Credential`.
    async fn get_credential(&self, provider: &str) -> Result<Credential, DomainError>;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::{Credential, CredentialProvider, DomainError};

/// Credential provider backed by a fixed map, resolved once up front
#[derive(Debug, Default, Clone)]
pub struct StaticCredentialProvider {
    keys: HashMap<String, String>,
}

impl StaticCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, provider: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.keys.insert(provider.into(), api_key.into());
        self
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn get_credential(&self, provider: &str) -> Result<Credential, DomainError> {
        self.keys
            .get(provider)
            .map(|key| Credential::new(provider, key.clone()))
            .ok_or_else(|| DomainError::credential(format!("API key for {} not found", provider)))
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_lookup() {
        let provider = StaticCredentialProvider::new().with_key("openai", "sk-1");

        assert_eq!(provider.get_credential("openai").await.unwrap().api_key(), "sk-1");
        assert!(matches!(
            provider.get_credential("anthropic").await,
            Err(DomainError::Credential { .. })
        ));
    }
}

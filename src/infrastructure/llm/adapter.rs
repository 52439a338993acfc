use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use super::factory::{ProviderFactory, ProviderSettings};
use super::http_client::{HttpClient, HttpClientTrait};
use super::MockChatProvider;
use crate::config::ProvidersConfig;
use crate::domain::llm::MOCK_PROVIDER_ID;
use crate::domain::{ChatMessage, ChatProvider, CredentialProvider, DomainError, ProviderKind};
use crate::infrastructure::observability::record_relay_request;

/// Dispatches a conversation to the provider selected by the client
#[derive(Debug)]
pub struct ProviderAdapter<C: HttpClientTrait + Clone = HttpClient> {
    client: C,
    credentials: Arc<dyn CredentialProvider>,
    endpoints: HashMap<String, String>,
    settings: ProviderSettings,
    mock: MockChatProvider,
}

impl<C: HttpClientTrait + Clone + 'static> ProviderAdapter<C> {
    pub fn new(client: C, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            client,
            credentials,
            endpoints: HashMap::new(),
            settings: ProviderSettings::default(),
            mock: MockChatProvider::default(),
        }
    }

    pub fn with_endpoint(mut self, provider: impl Into<String>, url: impl Into<String>) -> Self {
        self.endpoints.insert(provider.into(), url.into());
        self
    }

    pub fn with_config(mut self, config: &ProvidersConfig) -> Self {
        self.endpoints
            .extend(config.endpoints.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.settings = ProviderSettings::from(config);
        self
    }

    pub fn with_mock(mut self, mock: MockChatProvider) -> Self {
        self.mock = mock;
        self
    }

    /// Generate a reply from the provider named `provider_id`
    pub async fn generate(
        &self,
        provider_id: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError> {
        let start = Instant::now();
        let result = self.dispatch(provider_id, messages).await;

        record_relay_request(provider_id, result.is_ok(), start.elapsed());

        if let Err(ref e) = result {
            warn!(provider = %provider_id, error = %e, "Relay failed");
        }

        result
    }

    async fn dispatch(
        &self,
        provider_id: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError> {
        if provider_id == MOCK_PROVIDER_ID {
            debug!(
                provider = self.mock.provider_name(),
                messages = messages.len(),
                "Serving canned mock reply"
            );
            return self.mock.generate(messages).await;
        }

        debug!(
            provider = %provider_id,
            credential_source = self.credentials.provider_name(),
            "Resolving credential"
        );
        let credential = self.credentials.get_credential(provider_id).await?;

        let endpoint = self.endpoints.get(provider_id).ok_or_else(|| {
            DomainError::validation(format!("Endpoint for {} not found", provider_id))
        })?;

        let kind = ProviderKind::from_id(provider_id)
            .filter(|kind| !kind.is_mock())
            .ok_or_else(|| {
                DomainError::validation(format!("Provider {} is not supported", provider_id))
            })?;

        let provider = ProviderFactory::create(
            kind,
            self.client.clone(),
            &credential,
            endpoint,
            &self.settings,
        )?;

        debug!(
            provider = provider.provider_name(),
            endpoint = %endpoint,
            messages = messages.len(),
            "Forwarding conversation upstream"
        );

        provider.generate(messages).await
    }
}

use std::sync::Arc;

use super::anthropic::{DEFAULT_ANTHROPIC_MODEL, DEFAULT_MAX_TOKENS_TO_SAMPLE};
use super::http_client::HttpClientTrait;
use super::openai::DEFAULT_OPENAI_MODEL;
use super::{AnthropicProvider, MockChatProvider, OpenAiProvider};
use crate::config::ProvidersConfig;
use crate::domain::{ChatProvider, Credential, DomainError, LatencyWindow, ProviderKind};

/// Per-provider request settings
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub openai_model: String,
    pub anthropic_model: String,
    pub anthropic_max_tokens: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            anthropic_max_tokens: DEFAULT_MAX_TOKENS_TO_SAMPLE,
        }
    }
}

impl From<&ProvidersConfig> for ProviderSettings {
    fn from(config: &ProvidersConfig) -> Self {
        Self {
            openai_model: config.openai_model.clone(),
            anthropic_model: config.anthropic_model.clone(),
            anthropic_max_tokens: config.anthropic_max_tokens,
        }
    }
}

/// Factory for creating chat providers
#[derive(Debug)]
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create an upstream provider for one request
    pub fn create<C>(
        kind: ProviderKind,
        client: C,
        credential: &Credential,
        endpoint: &str,
        settings: &ProviderSettings,
    ) -> Result<Arc<dyn ChatProvider>, DomainError>
    where
        C: HttpClientTrait + 'static,
    {
        match kind {
            ProviderKind::OpenAi => Ok(Arc::new(
                OpenAiProvider::new(client, credential, endpoint)
                    .with_model(&settings.openai_model),
            )),

            ProviderKind::Anthropic => Ok(Arc::new(
                AnthropicProvider::new(client, credential, endpoint)
                    .with_model(&settings.anthropic_model)
                    .with_max_tokens(settings.anthropic_max_tokens),
            )),

            ProviderKind::Mock => Err(DomainError::configuration(
                "The mock provider takes no credential. Use create_mock instead.",
            )),
        }
    }

    /// Create the local mock provider
    pub fn create_mock(latency: LatencyWindow) -> MockChatProvider {
        MockChatProvider::new(latency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::HttpClient;

    #[test]
    fn test_create_openai_provider() {
        let provider = ProviderFactory::create(
            ProviderKind::OpenAi,
            HttpClient::new(),
            &Credential::new("openai", "sk-test"),
            "https://api.openai.com/v1/chat/completions",
            &ProviderSettings::default(),
        )
        .unwrap();

        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_anthropic_provider() {
        let provider = ProviderFactory::create(
            ProviderKind::Anthropic,
            HttpClient::new(),
            &Credential::new("anthropic", "sk-ant"),
            "https://api.anthropic.com/v1/complete",
            &ProviderSettings::default(),
        )
        .unwrap();

        assert_eq!(provider.provider_name(), "anthropic");
    }

    #[test]
    fn test_mock_kind_is_not_an_upstream_provider() {
        let result = ProviderFactory::create(
            ProviderKind::Mock,
            HttpClient::new(),
            &Credential::new("mock", "unused"),
            "http://localhost",
            &ProviderSettings::default(),
        );

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_settings_from_config() {
        let settings = ProviderSettings::from(&ProvidersConfig::default());
        assert_eq!(settings.openai_model, "gpt-3.5-turbo");
        assert_eq!(settings.anthropic_model, "claude-2.1");
    }
}

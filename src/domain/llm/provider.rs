use async_trait::async_trait;
use std::fmt::Debug;

use super::ChatMessage;
use crate::domain::DomainError;

/// Identifier of the local mock provider
pub const MOCK_PROVIDER_ID: &str = "mock";

/// Providers with a known request/response mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Mock,
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    /// Resolve a client-supplied provider identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            MOCK_PROVIDER_ID => Some(Self::Mock),
            "openai" => Some(Self::OpenAi),
            "anthropic" => Some(Self::Anthropic),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Mock => MOCK_PROVIDER_ID,
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A provider that turns a conversation into a single reply text
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug {
    /// Generate the reply for the conversation
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

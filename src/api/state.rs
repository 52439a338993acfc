//! Application state for shared services

use std::sync::Arc;

use crate::domain::{ChatMessage, DomainError, FeedbackStore};
use crate::infrastructure::llm::{HttpClientTrait, ProviderAdapter};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn ChatRelayTrait>,
    pub feedback_store: Arc<dyn FeedbackStore>,
}

impl AppState {
    pub fn new(relay: Arc<dyn ChatRelayTrait>, feedback_store: Arc<dyn FeedbackStore>) -> Self {
        Self {
            relay,
            feedback_store,
        }
    }
}

/// Trait for the chat relay
#[async_trait::async_trait]
pub trait ChatRelayTrait: Send + Sync {
    /// Reply text from the provider named `provider_id`
    async fn generate(
        &self,
        provider_id: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError>;
}

#[async_trait::async_trait]
impl<C: HttpClientTrait + Clone + 'static> ChatRelayTrait for ProviderAdapter<C> {
    async fn generate(
        &self,
        provider_id: &str,
        messages: &[ChatMessage],
    ) -> Result<String, DomainError> {
        ProviderAdapter::generate(self, provider_id, messages).await
    }
}

use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{ChatMessage, ChatProvider, Credential, DomainError};

const PROVIDER: &str = "openai";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI chat-completions provider
#[derive(Debug)]
pub struct OpenAiProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    endpoint: String,
    model: String,
}

impl<C: HttpClientTrait> OpenAiProvider<C> {
    pub fn new(client: C, credential: &Credential, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            auth_header: credential.bearer(),
            endpoint: endpoint.into(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Messages are forwarded exactly as the client sent them
    fn build_request(&self, messages: &[ChatMessage]) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": messages,
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, body: &str) -> Result<String, DomainError> {
        let response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::provider(PROVIDER, format!("Failed to parse response: {}", e))
        })?;

        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider(PROVIDER, "No choices in response"))?
            .message
            .content
            .ok_or_else(|| DomainError::provider(PROVIDER, "No message content in response"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> ChatProvider for OpenAiProvider<C> {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let body = self.build_request(messages);
        let response = self
            .client
            .post_json(&self.endpoint, self.headers(), &body)
            .await?;

        let body = response.ensure_ok(PROVIDER)?;
        self.parse_response(&body)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// OpenAI API types

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

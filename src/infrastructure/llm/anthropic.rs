use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{ChatMessage, ChatProvider, Credential, DomainError, MessageRole};

const PROVIDER: &str = "anthropic";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-2.1";
pub const DEFAULT_MAX_TOKENS_TO_SAMPLE: u32 = 1024;

const HUMAN_PROMPT: &str = "\n\nHuman:";
const AI_PROMPT: &str = "\n\nAssistant:";

/// Anthropic text-completions provider
#[derive(Debug)]
pub struct AnthropicProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    auth_header: String,
    endpoint: String,
    model: String,
    max_tokens_to_sample: u32,
}

impl<C: HttpClientTrait> AnthropicProvider<C> {
    pub fn new(client: C, credential: &Credential, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            api_key: credential.api_key().to_string(),
            auth_header: credential.bearer(),
            endpoint: endpoint.into(),
            model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            max_tokens_to_sample: DEFAULT_MAX_TOKENS_TO_SAMPLE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens_to_sample = max_tokens;
        self
    }

    fn build_request(&self, messages: &[ChatMessage]) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "prompt": build_prompt(messages),
            "max_tokens_to_sample": self.max_tokens_to_sample,
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("x-api-key", self.api_key.as_str()),
            ("anthropic-version", ANTHROPIC_VERSION),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, body: &str) -> Result<String, DomainError> {
        let response: AnthropicResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::provider(PROVIDER, format!("Failed to parse response: {}", e))
        })?;

        Ok(response.completion)
    }
}

/// Serialize the conversation into a single Human/Assistant transcript.
///
/// A leading system message becomes the preamble; every other non-assistant
/// message is a Human turn. The transcript always ends on an open
/// Assistant turn.
fn build_prompt(messages: &[ChatMessage]) -> String {
    let mut prompt = String::new();

    for (idx, message) in messages.iter().enumerate() {
        let text = message.content_text();

        match message.role() {
            Some(MessageRole::System) if idx == 0 => prompt.push_str(&text),
            Some(MessageRole::Assistant) => {
                prompt.push_str(AI_PROMPT);
                prompt.push(' ');
                prompt.push_str(&text);
            }
            _ => {
                prompt.push_str(HUMAN_PROMPT);
                prompt.push(' ');
                prompt.push_str(&text);
            }
        }
    }

    prompt.push_str(AI_PROMPT);
    prompt
}

#[async_trait]
impl<C: HttpClientTrait> ChatProvider for AnthropicProvider<C> {
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

// Anthropic API types

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    completion: String,
}

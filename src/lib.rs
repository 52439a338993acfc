//! Chat Relay API
//!
//! Forwards chat conversations to a selected LLM provider and stores user
//! feedback:
//! - `POST /chat` relays to OpenAI, Anthropic or a local mock
//! - `POST /feedback` persists a screenshot and a client-state snapshot

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::{CredentialProvider, LatencyWindow};
use infrastructure::{
    credentials::EnvCredentialProvider,
    feedback::FileFeedbackStore,
    llm::{HttpClient, ProviderAdapter, ProviderFactory},
};
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let http_client = match config.providers.timeout_secs {
        Some(secs) => HttpClient::with_timeout(Duration::from_secs(secs))?,
        None => HttpClient::new(),
    };

    let latency = LatencyWindow::from_millis(config.mock.min_delay_ms, config.mock.max_delay_ms);

    let credentials = EnvCredentialProvider::new();
    info!(source = credentials.provider_name(), "Credential provider configured");

    let adapter = ProviderAdapter::new(http_client, Arc::new(credentials))
        .with_config(&config.providers)
        .with_mock(ProviderFactory::create_mock(latency));

    let mut providers: Vec<&str> = config.providers.endpoints.keys().map(String::as_str).collect();
    providers.sort_unstable();
    info!(providers = ?providers, "Provider endpoints configured");

    let feedback_store = FileFeedbackStore::new(&config.feedback.directory);
    info!(directory = %feedback_store.directory().display(), "Feedback directory");

    Ok(AppState::new(Arc::new(adapter), Arc::new(feedback_store)))
}

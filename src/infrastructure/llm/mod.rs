//! Chat provider implementations

mod adapter;
mod anthropic;
mod factory;
mod http_client;
mod mock;
mod openai;

pub use adapter::ProviderAdapter;
pub use anthropic::AnthropicProvider;
pub use factory::{ProviderFactory, ProviderSettings};
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};
pub use mock::MockChatProvider;
pub use openai::OpenAiProvider;

//! Chat provider domain models and traits

mod canned;
mod message;
mod provider;

pub use canned::{choose_reply, LatencyWindow, CANNED_REPLIES};
pub use message::{ChatMessage, MessageRole};
pub use provider::{ChatProvider, ProviderKind, MOCK_PROVIDER_ID};

#[cfg(test)]
pub use provider::mock::StubChatProvider;

//! Domain layer - Core entities and traits

pub mod credentials;
pub mod error;
pub mod feedback;
pub mod llm;

pub use credentials::{Credential, CredentialProvider};
pub use error::DomainError;
pub use feedback::{FeedbackId, FeedbackStore, FeedbackSubmission, StoredFeedback};
pub use llm::{ChatMessage, ChatProvider, LatencyWindow, MessageRole, ProviderKind};

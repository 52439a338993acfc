//! Chat relay request/response types

use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub llm_choice: String,
}

/// Body returned by `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

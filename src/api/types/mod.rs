//! Request/response types of the HTTP API

pub mod chat;
pub mod error;
pub mod feedback;
pub mod json;

pub use chat::{ChatRequest, ChatResponse};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use feedback::{FeedbackRequest, FeedbackResponse};
pub use json::Json;

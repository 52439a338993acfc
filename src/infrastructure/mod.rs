//! Infrastructure layer - External service implementations

pub mod credentials;
pub mod feedback;
pub mod llm;
pub mod logging;
pub mod observability;

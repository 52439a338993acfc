use async_trait::async_trait;

use super::{FeedbackSubmission, StoredFeedback};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Persistence for feedback submissions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persists the screenshot and the state blob of one submission
    async fn save(&self, submission: &FeedbackSubmission) -> Result<StoredFeedback, DomainError>;
}

//! Feedback submission types

use serde::{Deserialize, Serialize};

use crate::domain::FeedbackSubmission;

pub const FEEDBACK_RECEIVED: &str = "Feedback received successfully";

/// Body of `POST /feedback`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub screenshot: String,
    #[serde(rename = "localState")]
    pub local_state: String,
}

impl From<FeedbackRequest> for FeedbackSubmission {
    fn from(request: FeedbackRequest) -> Self {
        FeedbackSubmission::new(request.screenshot, request.local_state)
    }
}

/// Body returned by `POST /feedback`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub message: String,
}

impl FeedbackResponse {
    pub fn received() -> Self {
        Self {
            message: FEEDBACK_RECEIVED.to_string(),
        }
    }
}

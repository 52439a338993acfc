use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};

use crate::domain::DomainError;

/// Screenshot plus serialized client state, as submitted by the UI
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    /// Data URL, `<prefix>,<base64 image bytes>`
    pub screenshot: String,
    /// Opaque client state, stored verbatim
    pub local_state: String,
}

impl FeedbackSubmission {
    pub fn new(screenshot: impl Into<String>, local_state: impl Into<String>) -> Self {
        Self {
            screenshot: screenshot.into(),
            local_state: local_state.into(),
        }
    }

    /// Decoded screenshot bytes
    pub fn screenshot_bytes(&self) -> Result<Vec<u8>, DomainError> {
        decode_data_url(&self.screenshot)
    }
}

/// Decode the base64 payload that follows the first comma of a data URL
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, DomainError> {
    let (_, payload) = data_url
        .split_once(',')
        .ok_or_else(|| DomainError::feedback("Screenshot is not a data URL: missing ','"))?;

    STANDARD
        .decode(payload.trim())
        .map_err(|e| DomainError::feedback(format!("Invalid screenshot encoding: {}", e)))
}

/// Identifier shared by the two files of one submission.
///
/// Second-resolution timestamp followed by a random suffix, so two
/// submissions in the same second land in different files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn generate() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(timestamp: DateTime<Utc>) -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{}_{}", timestamp.format("%Y%m%d_%H%M%S"), &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn screenshot_file_name(&self) -> String {
        format!("screenshot_{}.png", self.0)
    }

    pub fn state_file_name(&self) -> String {
        format!("state_{}.json", self.0)
    }
}

impl std::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a submission ended up
#[derive(Debug, Clone)]
pub struct StoredFeedback {
    pub id: FeedbackId,
    pub screenshot_path: PathBuf,
    pub state_path: PathBuf,
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{DomainError, FeedbackId, FeedbackStore, FeedbackSubmission, StoredFeedback};

/// Writes each submission as a screenshot/state file pair in a flat directory
#[derive(Debug, Clone)]
pub struct FileFeedbackStore {
    directory: PathBuf,
}

impl FileFeedbackStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> Result<(), DomainError> {
        tokio::fs::write(path, contents).await.map_err(|e| {
            DomainError::storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Write both files of a submission, or neither
    async fn store(
        &self,
        id: FeedbackId,
        submission: &FeedbackSubmission,
    ) -> Result<StoredFeedback, DomainError> {
        tokio::fs::create_dir_all(&self.directory).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to create feedback directory {}: {}",
                self.directory.display(),
                e
            ))
        })?;

        // Decode before touching disk so a bad screenshot leaves no files behind
        let image = submission.screenshot_bytes()?;

        let screenshot_path = self.directory.join(id.screenshot_file_name());
        self.write(&screenshot_path, &image).await?;

        let state_path = self.directory.join(id.state_file_name());
        if let Err(e) = self
            .write(&state_path, submission.local_state.as_bytes())
            .await
        {
            if let Err(cleanup) = tokio::fs::remove_file(&screenshot_path).await {
                warn!(
                    path = %screenshot_path.display(),
                    error = %cleanup,
                    "Failed to remove screenshot of incomplete feedback"
                );
            }
            return Err(e);
        }

        info!(
            feedback_id = %id,
            screenshot_bytes = image.len(),
            state_bytes = submission.local_state.len(),
            "Feedback stored"
        );

        Ok(StoredFeedback {
            id,
            screenshot_path,
            state_path,
        })
    }
}

#[async_trait]
impl FeedbackStore for FileFeedbackStore {
    async fn save(&self, submission: &FeedbackSubmission) -> Result<StoredFeedback, DomainError> {
        self.store(FeedbackId::generate(), submission).await
    }
}

//! Feedback submission endpoint handler

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, FeedbackRequest, FeedbackResponse, Json};
use crate::domain::FeedbackSubmission;

/// POST /feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let submission = FeedbackSubmission::from(request);

    let stored = state.feedback_store.save(&submission).await?;

    info!(
        feedback_id = %stored.id,
        screenshot = %stored.screenshot_path.display(),
        state = %stored.state_path.display(),
        "Feedback received"
    );

    Ok(Json(FeedbackResponse::received()))
}

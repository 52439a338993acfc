//! Chat relay endpoint handler

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ChatRequest, ChatResponse, Json};

/// POST /chat
pub async fn relay(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    info!(
        provider = %request.llm_choice,
        messages = request.messages.len(),
        "Processing chat relay request"
    );

    let response = state
        .relay
        .generate(&request.llm_choice, &request.messages)
        .await?;

    Ok(Json(ChatResponse { response }))
}

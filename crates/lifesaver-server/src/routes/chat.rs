//! Emergency chat relay route.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use lifesaver_assist::ChatError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub async fn chat_with_ai(
    State(state): State<AppState>,
    Json(input): Json<ChatMessage>,
) -> Result<Json<ChatResponse>, ApiError> {
    match state.chat.relay(&input.message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(ChatError::MissingApiKey) => Err(ApiError::MissingApiKey),
        Err(e) => {
            error!("chat relay failed: {e}");
            Err(ApiError::ChatService(e.to_string()))
        }
    }
}

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if payload.messages.is_empty() {
        return Err(AppError::BadRequest("messages must not be empty".to_string()));
    }

    let response = state.chat.handle_chat(payload.messages).await?;
    Ok(Json(response))
}

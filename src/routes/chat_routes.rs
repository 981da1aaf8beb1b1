use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use validator::Validate;

use crate::models::chat::{ChatReply, ChatRequest};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_chat_router() -> Router<AppState> {
    Router::new().route("/chat", post(send_chat_message))
}

async fn send_chat_message(
    State(state): State<AppState>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = request.map_err(|rejection| bad_request_error(&rejection.body_text()))?;
    request.validate()?;

    let reply = state.analytics.send_chat_message(request).await?;
    Ok(Json(reply))
}

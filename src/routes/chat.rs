use axum::{Json, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::respond,
};

pub async fn chat_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Undecodable bodies are an internal fault, not a validation error.
    let Json(body) = payload.map_err(|rejection| AppError::Internal(rejection.body_text()))?;

    let ChatRequest { message, timestamp } =
        ChatRequest::from_body(body).ok_or(AppError::MissingMessage)?;

    tracing::info!("Received message: {}", message);

    let reply = respond(&message);

    tracing::info!("Generated response: {}", reply);

    Ok(Json(ChatResponse::success(reply, timestamp)))
}

// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Message is required")]
    MissingMessage,

    /// Detail is logged, never sent to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingMessage => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub fn internal_error_body() -> ErrorResponse {
    ErrorResponse {
        error: "Internal server error".to_string(),
        status: Some("error".to_string()),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::MissingMessage => ErrorResponse {
                error: self.to_string(),
                status: None,
            },
            AppError::Internal(detail) => {
                tracing::error!("Error in chat endpoint: {}", detail);
                internal_error_body()
            }
        };

        (status, Json(body)).into_response()
    }
}

pub mod events;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Route-level errors mapped to HTTP responses.
pub enum AppError {
    NotFound(String),
    Internal(anyhow::Error),
}

impl AppError {
    pub fn not_found(id: Uuid) -> Self {
        AppError::NotFound(format!("Event not found: {id}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Convert anyhow errors (and anything that becomes one) to HTTP 500s
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}

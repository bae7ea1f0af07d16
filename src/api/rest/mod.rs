//! REST handlers for the scheduling board
//!
//! - `GET /api/events` - list active events with an optional filter
//! - `POST /api/events` - create an event
//! - `PATCH /api/events/:id` - update lifecycle flags
//! - `DELETE /api/events/:id` - soft-delete an event
//! - `POST /api/admin/login` - admin credential check
//! - `GET /api/events/export/csv` - CSV export

pub mod admin;
pub mod events;
pub mod export;

use axum::http::StatusCode;
use serde::Serialize;

use crate::error::BoardError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNAUTHORIZED".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Single mapping from core errors to transport status + body
///
/// Error kinds arrive here losslessly typed; storage details are logged but
/// never echoed to the client.
pub fn error_response(err: BoardError) -> (StatusCode, ApiError) {
    match err {
        BoardError::Validation { .. } => (
            StatusCode::BAD_REQUEST,
            ApiError::bad_request(err.to_string()),
        ),
        BoardError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, ApiError::not_found(err.to_string()))
        }
        BoardError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            ApiError::unauthorized(err.to_string()),
        ),
        BoardError::Storage(_) | BoardError::Hash(_) => {
            eprintln!("[Api] {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal("Database error"),
            )
        }
    }
}

//! Admin login endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use super::{error_response, ApiError};
use crate::api::state::AppState;
use crate::types::AdminIdentity;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AdminIdentity,
}

/// POST /api/admin/login - verify the shared admin credential
///
/// Missing or empty credentials are a 400 before auth is consulted; actual
/// credential failures stay a constant-shape 401.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("Username and password required")),
        )
            .into_response();
    }

    match state.auth.authenticate(&username, &password) {
        Ok(user) => (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Login successful".to_string(),
                user,
            }),
        )
            .into_response(),
        Err(err) => {
            let (status, body) = error_response(err);
            (status, Json(body)).into_response()
        }
    }
}

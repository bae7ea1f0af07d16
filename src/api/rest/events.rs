//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error_response;
use crate::api::state::AppState;
use crate::types::{EventChanges, EventDraft, EventFilter};

/// Query parameters for listing events
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    /// upcoming | completed | pending; anything else means no filter
    #[serde(default)]
    pub filter: Option<String>,
}

/// GET /api/events - list active events, soonest first
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    let filter = EventFilter::from_param(params.filter.as_deref());

    match state.board.list_events(filter) {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(err) => {
            let (status, body) = error_response(err);
            (status, Json(body)).into_response()
        }
    }
}

/// Response for a successful creation
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub id: i64,
    pub message: String,
    pub duration: i64,
}

/// POST /api/events - validate and insert a new event
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<EventDraft>,
) -> impl IntoResponse {
    match state.board.create_event(&draft) {
        Ok(created) => (
            StatusCode::CREATED,
            Json(CreateEventResponse {
                id: created.id,
                message: "Event created successfully".to_string(),
                duration: created.duration,
            }),
        )
            .into_response(),
        Err(err) => {
            let (status, body) = error_response(err);
            (status, Json(body)).into_response()
        }
    }
}

/// PATCH /api/events/:id - update lifecycle flags
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(changes): Json<EventChanges>,
) -> impl IntoResponse {
    match state.board.update_event(id, &changes) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Event updated successfully" })),
        )
            .into_response(),
        Err(err) => {
            let (status, body) = error_response(err);
            (status, Json(body)).into_response()
        }
    }
}

/// DELETE /api/events/:id - soft-delete; the row stays in the store
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.board.soft_delete(id) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Event deleted successfully" })),
        )
            .into_response(),
        Err(err) => {
            let (status, body) = error_response(err);
            (status, Json(body)).into_response()
        }
    }
}

//! CSV export endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::error_response;
use crate::api::state::AppState;
use crate::export::events_to_csv;

/// GET /api/events/export/csv - full event set, deleted rows included,
/// latest first
pub async fn export_csv(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.board.export_events() {
        Ok(events) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=warehouse_events.csv",
                ),
            ],
            events_to_csv(&events),
        )
            .into_response(),
        Err(err) => {
            let (status, body) = error_response(err);
            (status, Json(body)).into_response()
        }
    }
}

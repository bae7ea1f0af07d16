//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{admin, events, export};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins, the board is an internal tool
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Event lifecycle
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route("/api/events/export/csv", get(export::export_csv))
        .route(
            "/api/events/:id",
            patch(events::update_event).delete(events::delete_event),
        )
        // Admin login
        .route("/api/admin/login", post(admin::login))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": "connected",
    }))
}

//! Warehouse Scheduling Service - Binary Entry Point
//!
//! This is the main entry point for the warehouse-server binary.

use std::env;
use std::sync::Arc;

use warehouse_scheduler::api::http::create_router;
use warehouse_scheduler::{AdminAuth, AppState, EventStore, ScheduleBoard};

/// Fixed username of the single admin principal
const ADMIN_USERNAME: &str = "admin";

/// Default admin password; override with WAREHOUSE_ADMIN_PASSWORD
const DEFAULT_ADMIN_PASSWORD: &str = "dhl2025";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path =
        env::var("WAREHOUSE_DB_PATH").unwrap_or_else(|_| "warehouse_events.db".to_string());
    let port = env::var("WAREHOUSE_PORT")
        .or_else(|_| env::var("PORT"))
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);
    let admin_password =
        env::var("WAREHOUSE_ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

    let store = Arc::new(EventStore::open(&db_path)?);
    eprintln!("[Store] Connected to SQLite database at {}", db_path);

    let board = Arc::new(ScheduleBoard::new(store.clone()));
    let auth = Arc::new(AdminAuth::new(store));
    auth.provision_default(ADMIN_USERNAME, &admin_password)?;
    eprintln!("[Auth] Admin account '{}' ready", ADMIN_USERNAME);

    let app = create_router(Arc::new(AppState::new(board, auth)));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    eprintln!("[Server] Warehouse scheduler listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    eprintln!("[Server] Shut down");
    Ok(())
}

/// Resolve when Ctrl+C is received
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        eprintln!("[Server] Failed to listen for shutdown signal: {}", err);
    }
}

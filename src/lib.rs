//! Warehouse Event Scheduling Service
//!
//! A small scheduling board for warehouse events (truck arrivals, client
//! visits) exposed over HTTP: create, list, filter, complete, soft-delete,
//! and export events to CSV, gated by a single shared admin credential.
//!
//! # Features
//!
//! - **Event lifecycle**: creation validation, load-type duration derivation,
//!   upcoming/pending/completed classification, soft-delete semantics
//! - **SQLite persistence**: one `events` table plus a single admin account row
//! - **Admin auth**: bcrypt-verified shared credential, provisioned at startup
//! - **CSV export**: fixed 11-column audit export, deleted rows included
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, EventDraft, EventFilter)
//! - `error`: Crate error type and result alias
//! - `store`: rusqlite-backed event and account persistence
//! - `schedule_board`: Business rules layered on top of the raw store
//! - `auth`: Admin credential verification
//! - `export`: CSV rendering of the event set
//! - `api`: Axum router and REST handlers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use warehouse_scheduler::api::http::create_router;
//! use warehouse_scheduler::{AdminAuth, AppState, EventStore, ScheduleBoard};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(EventStore::open("warehouse_events.db").unwrap());
//!     let board = Arc::new(ScheduleBoard::new(store.clone()));
//!     let auth = Arc::new(AdminAuth::new(store));
//!     auth.provision_default("admin", "dhl2025").unwrap();
//!
//!     let app = create_router(Arc::new(AppState::new(board, auth)));
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod export;
pub mod schedule_board;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::state::AppState;
pub use auth::AdminAuth;
pub use error::{BoardError, BoardResult};
pub use export::events_to_csv;
pub use schedule_board::ScheduleBoard;
pub use store::EventStore;
pub use types::{
    AdminAccount, AdminIdentity, CreatedEvent, Event, EventChanges, EventDraft, EventFilter,
    SortOrder,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Event Store - rusqlite persistence
//!
//! Owns the SQLite connection and the raw table operations. Business rules
//! live in `schedule_board`; this layer only enforces column constraints and
//! reports changed-row counts. Per-statement atomicity from SQLite is the
//! only isolation guarantee; racing updates to the same row are last-write-
//! wins.

mod accounts;
mod events;

pub use events::NewEvent;

use parking_lot::Mutex;
use rusqlite::Connection;

use crate::error::BoardResult;
use crate::types::{AdminAccount, Event, EventChanges, EventFilter, SortOrder};

/// SQLite-backed store for the events table and the admin account table
pub struct EventStore {
    pub(crate) conn: Mutex<Connection>,
}

impl EventStore {
    /// Open (or create) the database file and ensure the schema exists
    pub fn open(path: &str) -> BoardResult<Self> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store, used by tests
    pub fn open_in_memory() -> BoardResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

/// Initialize the database schema
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            type        TEXT NOT NULL,
            truck_plate TEXT,
            purpose     TEXT,
            load_type   TEXT,
            date_time   TEXT NOT NULL,
            duration    INTEGER NOT NULL DEFAULT 30,
            created_by  TEXT NOT NULL,
            notes       TEXT,
            completed   INTEGER NOT NULL DEFAULT 0,
            deleted     INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL      -- ISO 8601 timestamp
        );

        CREATE TABLE IF NOT EXISTS admin_users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            username      TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );
        ",
    )
}

// Re-export operations from submodules by implementing them here
impl EventStore {
    /// Insert a fully-derived event row; returns the assigned id
    pub fn insert_event(&self, record: &NewEvent) -> BoardResult<i64> {
        events::insert_event(self, record)
    }

    /// Consolidated listing query: one filter/order entry point for every
    /// call site. `now` is bound only by the upcoming filter.
    pub fn query_events(
        &self,
        filter: EventFilter,
        include_deleted: bool,
        order: SortOrder,
        now: &str,
    ) -> BoardResult<Vec<Event>> {
        events::query_events(self, filter, include_deleted, order, now)
    }

    /// Apply a sparse flag update to one row; a count of 0 means no row with
    /// that id exists (signalled by value, not by error)
    pub fn update_event_fields(&self, id: i64, changes: &EventChanges) -> BoardResult<usize> {
        events::update_event_fields(self, id, changes)
    }

    /// Look up the stored account for a username
    pub fn find_account(&self, username: &str) -> BoardResult<Option<AdminAccount>> {
        accounts::find_account(self, username)
    }

    /// Provision an account unless the username is already taken
    pub fn insert_account_if_absent(&self, username: &str, password_hash: &str) -> BoardResult<()> {
        accounts::insert_account_if_absent(self, username, password_hash)
    }
}

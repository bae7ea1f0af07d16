//! Schedule Board - business rules over the raw event store
//!
//! All lifecycle and listing rules live here: creation validation, duration
//! derivation, filter classification, and the two narrow flag transitions.
//! The store below only moves rows; the API above only maps errors.

mod lifecycle;
mod query;

use std::sync::Arc;

use crate::error::BoardResult;
use crate::store::EventStore;
use crate::types::{CreatedEvent, Event, EventChanges, EventDraft, EventFilter};

/// Lifecycle service for the scheduling board
pub struct ScheduleBoard {
    pub(crate) store: Arc<EventStore>,
}

impl ScheduleBoard {
    /// Create a board over an open store
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

// Re-export operations from submodules by implementing them here
impl ScheduleBoard {
    // Lifecycle transitions (from lifecycle.rs)

    /// Validate a draft, derive its duration, and insert it
    pub fn create_event(&self, draft: &EventDraft) -> BoardResult<CreatedEvent> {
        lifecycle::create_event(self, draft)
    }

    /// Apply a sparse `{completed, deleted}` update to one event
    pub fn update_event(&self, id: i64, changes: &EventChanges) -> BoardResult<()> {
        lifecycle::update_event(self, id, changes)
    }

    /// Set `completed = true`
    pub fn mark_completed(&self, id: i64) -> BoardResult<()> {
        lifecycle::mark_completed(self, id)
    }

    /// Set `deleted = true`; `completed` is left as-is and the row stays in
    /// the store for export
    pub fn soft_delete(&self, id: i64) -> BoardResult<()> {
        lifecycle::soft_delete(self, id)
    }

    // Listing (from query.rs)

    /// Active events matching the filter, soonest first
    pub fn list_events(&self, filter: EventFilter) -> BoardResult<Vec<Event>> {
        query::list_events(self, filter)
    }

    /// Every event including deleted ones, latest first (the export view)
    pub fn export_events(&self) -> BoardResult<Vec<Event>> {
        query::export_events(self)
    }
}

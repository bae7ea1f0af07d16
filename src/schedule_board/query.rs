//! Listing and export selection
//!
//! The single global ordering contract is ascending `date_time`; the export
//! view re-sorts descending and is the only path that includes deleted rows.

use chrono::Utc;

use crate::error::BoardResult;
use crate::types::{Event, EventFilter, SortOrder};

use super::ScheduleBoard;

/// Clock format SQLite's `datetime()` parses without guessing
const SQLITE_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn evaluation_clock() -> String {
    Utc::now().format(SQLITE_CLOCK_FORMAT).to_string()
}

pub(super) fn list_events(board: &ScheduleBoard, filter: EventFilter) -> BoardResult<Vec<Event>> {
    board
        .store
        .query_events(filter, false, SortOrder::Ascending, &evaluation_clock())
}

pub(super) fn export_events(board: &ScheduleBoard) -> BoardResult<Vec<Event>> {
    board.store.query_events(
        EventFilter::All,
        true,
        SortOrder::Descending,
        &evaluation_clock(),
    )
}

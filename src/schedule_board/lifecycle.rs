//! Creation validation and status transitions

use crate::error::{BoardError, BoardResult};
use crate::store::NewEvent;
use crate::types::{CreatedEvent, EventChanges, EventDraft};

use super::ScheduleBoard;

/// Event type that carries the truck-specific required fields
const TRUCK_ARRIVAL: &str = "Truck Arrival";

/// Full truck loads block the dock for an hour; everything else gets the
/// half-hour default, including absent or unrecognized load types
const FTL_DURATION_MINUTES: i64 = 60;
const DEFAULT_DURATION_MINUTES: i64 = 30;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.is_empty())
}

fn derive_duration(load_type: Option<&str>) -> i64 {
    if load_type == Some("FTL") {
        FTL_DURATION_MINUTES
    } else {
        DEFAULT_DURATION_MINUTES
    }
}

pub(super) fn create_event(board: &ScheduleBoard, draft: &EventDraft) -> BoardResult<CreatedEvent> {
    let (Some(event_type), Some(date_time), Some(created_by)) = (
        draft.event_type.as_deref().filter(|v| !v.is_empty()),
        draft.date_time.as_deref().filter(|v| !v.is_empty()),
        draft.created_by.as_deref().filter(|v| !v.is_empty()),
    ) else {
        return Err(BoardError::validation(
            "missing_required_fields",
            "Missing required fields: type, date_time, created_by",
        ));
    };

    if event_type == TRUCK_ARRIVAL
        && (is_blank(draft.truck_plate.as_deref())
            || is_blank(draft.purpose.as_deref())
            || is_blank(draft.load_type.as_deref()))
    {
        return Err(BoardError::validation(
            "missing_truck_fields",
            "Truck arrivals require truck_plate, purpose, and load_type",
        ));
    }

    let duration = derive_duration(draft.load_type.as_deref());

    let id = board.store.insert_event(&NewEvent {
        event_type,
        truck_plate: draft.truck_plate.as_deref(),
        purpose: draft.purpose.as_deref(),
        load_type: draft.load_type.as_deref(),
        date_time,
        duration,
        created_by,
        notes: draft.notes.as_deref(),
    })?;

    Ok(CreatedEvent { id, duration })
}

/// Generic partial update over the two lifecycle flags; rejects an empty
/// change set before touching the store
pub(super) fn update_event(
    board: &ScheduleBoard,
    id: i64,
    changes: &EventChanges,
) -> BoardResult<()> {
    if changes.is_empty() {
        return Err(BoardError::validation(
            "no_fields",
            "No valid fields to update",
        ));
    }

    let changed = board.store.update_event_fields(id, changes)?;
    if changed == 0 {
        return Err(BoardError::NotFound { id });
    }
    Ok(())
}

pub(super) fn mark_completed(board: &ScheduleBoard, id: i64) -> BoardResult<()> {
    update_event(
        board,
        id,
        &EventChanges {
            completed: Some(true),
            deleted: None,
        },
    )
}

pub(super) fn soft_delete(board: &ScheduleBoard, id: i64) -> BoardResult<()> {
    update_event(
        board,
        id,
        &EventChanges {
            completed: None,
            deleted: Some(true),
        },
    )
}

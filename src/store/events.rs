//! Event table operations

use chrono::Utc;
use rusqlite::{params, Row, ToSql};

use crate::error::BoardResult;
use crate::types::{Event, EventChanges, EventFilter, SortOrder};

use super::EventStore;

const EVENT_COLUMNS: &str = "id, type, truck_plate, purpose, load_type, date_time, duration, \
                             created_by, notes, completed, deleted, created_at";

/// Fully-derived record ready for insertion
#[derive(Debug)]
pub struct NewEvent<'a> {
    pub event_type: &'a str,
    pub truck_plate: Option<&'a str>,
    pub purpose: Option<&'a str>,
    pub load_type: Option<&'a str>,
    pub date_time: &'a str,
    pub duration: i64,
    pub created_by: &'a str,
    pub notes: Option<&'a str>,
}

fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        event_type: row.get("type")?,
        truck_plate: row.get("truck_plate")?,
        purpose: row.get("purpose")?,
        load_type: row.get("load_type")?,
        date_time: row.get("date_time")?,
        duration: row.get("duration")?,
        created_by: row.get("created_by")?,
        notes: row.get("notes")?,
        completed: row.get("completed")?,
        deleted: row.get("deleted")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new event row; both lifecycle flags start cleared
pub(super) fn insert_event(store: &EventStore, record: &NewEvent) -> BoardResult<i64> {
    let conn = store.conn.lock();
    conn.execute(
        "INSERT INTO events (type, truck_plate, purpose, load_type, date_time, duration, \
         created_by, notes, completed, deleted, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, 0, ?9)",
        params![
            record.event_type,
            record.truck_plate,
            record.purpose,
            record.load_type,
            record.date_time,
            record.duration,
            record.created_by,
            record.notes,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Build and run the single listing query
///
/// The upcoming predicate goes through SQLite's `datetime()` so client
/// timestamps compare correctly regardless of their exact ISO 8601 shape;
/// ordering stays on the raw `date_time` column.
pub(super) fn query_events(
    store: &EventStore,
    filter: EventFilter,
    include_deleted: bool,
    order: SortOrder,
    now: &str,
) -> BoardResult<Vec<Event>> {
    let mut sql = format!("SELECT {} FROM events", EVENT_COLUMNS);
    let mut conditions: Vec<&str> = Vec::new();
    let mut params_vec: Vec<&dyn ToSql> = Vec::new();

    if !include_deleted {
        conditions.push("deleted = 0");
    }

    match filter {
        EventFilter::Upcoming => {
            conditions.push("completed = 0 AND datetime(date_time) > datetime(?1)");
            params_vec.push(&now);
        }
        EventFilter::Completed => conditions.push("completed = 1"),
        EventFilter::Pending => conditions.push("completed = 0"),
        EventFilter::All => {}
    }

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    sql.push_str(match order {
        SortOrder::Ascending => " ORDER BY date_time ASC",
        SortOrder::Descending => " ORDER BY date_time DESC",
    });

    let conn = store.conn.lock();
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(params_vec.as_slice(), row_to_event)?;

    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}

/// Sparse flag update over `{completed, deleted}`
///
/// Caller guarantees at least one field is present. The count reflects rows
/// matched by id, so re-flagging an already-deleted row still reports 1.
pub(super) fn update_event_fields(
    store: &EventStore,
    id: i64,
    changes: &EventChanges,
) -> BoardResult<usize> {
    let mut sets: Vec<&str> = Vec::new();
    let mut params_vec: Vec<&dyn ToSql> = Vec::new();

    if let Some(completed) = &changes.completed {
        sets.push("completed = ?");
        params_vec.push(completed);
    }
    if let Some(deleted) = &changes.deleted {
        sets.push("deleted = ?");
        params_vec.push(deleted);
    }
    params_vec.push(&id);

    let sql = format!("UPDATE events SET {} WHERE id = ?", sets.join(", "));

    let conn = store.conn.lock();
    let mut stmt = conn.prepare_cached(&sql)?;
    let changed = stmt.execute(rusqlite::params_from_iter(params_vec))?;
    Ok(changed)
}

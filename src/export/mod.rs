//! CSV export of the full event set
//!
//! The one view that includes soft-deleted rows. The column layout is fixed;
//! callers supply the ordering (the API passes events latest-first).

use crate::types::Event;

/// Fixed header row
const CSV_HEADER: &str =
    "ID,Type,Truck Plate,Purpose,Load Type,Date Time,Duration,Created By,Notes,Completed,Deleted";

/// Quote a free-text field, doubling embedded quotes so a stray `"` in the
/// notes cannot break the column count
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Render events as CSV text; zero events yield exactly the header line
pub fn events_to_csv(events: &[Event]) -> String {
    let mut out = String::from(CSV_HEADER);

    for event in events {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            event.id,
            quoted(&event.event_type),
            quoted(event.truck_plate.as_deref().unwrap_or("")),
            quoted(event.purpose.as_deref().unwrap_or("")),
            quoted(event.load_type.as_deref().unwrap_or("")),
            quoted(&event.date_time),
            event.duration,
            quoted(&event.created_by),
            quoted(event.notes.as_deref().unwrap_or("")),
            yes_no(event.completed),
            yes_no(event.deleted),
        ));
    }

    out
}

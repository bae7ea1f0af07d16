//! Event entity and its wire-level companions

use serde::{Deserialize, Serialize};

/// A scheduled warehouse occurrence (truck arrival, client visit, ...)
///
/// `duration` is derived from the load type when the event is created and is
/// never recomputed; the truck-specific fields have no update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned, unique, never reused
    pub id: i64,
    /// Free-form category; "Truck Arrival" triggers the extra field checks
    #[serde(rename = "type")]
    pub event_type: String,
    pub truck_plate: Option<String>,
    pub purpose: Option<String>,
    /// "FTL" or "PTL" expected; membership is not enforced
    pub load_type: Option<String>,
    /// Stored and compared as supplied; no timezone normalization
    pub date_time: String,
    /// Blocked-slot length in minutes
    pub duration: i64,
    pub created_by: String,
    pub notes: Option<String>,
    pub completed: bool,
    /// Soft-delete marker; flagged rows stay in the store for export
    pub deleted: bool,
    /// Store-assigned at insert
    pub created_at: String,
}

/// Creation payload
///
/// Every field is optional at the wire level so that completeness is checked
/// by the lifecycle rules rather than the deserializer, keeping the error
/// shape uniform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDraft {
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub truck_plate: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub load_type: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Outcome of a successful creation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreatedEvent {
    pub id: i64,
    pub duration: i64,
}

/// Sparse update over the two lifecycle flags
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EventChanges {
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub deleted: Option<bool>,
}

impl EventChanges {
    /// True when no flag is present in the request
    pub fn is_empty(&self) -> bool {
        self.completed.is_none() && self.deleted.is_none()
    }
}

/// Listing filter over the non-deleted event set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    /// Every non-deleted row
    #[default]
    All,
    /// Not completed and scheduled strictly after the evaluation-time clock
    Upcoming,
    /// Completed rows only
    Completed,
    /// Not yet completed, past or future
    Pending,
}

impl EventFilter {
    /// Lenient parse of the `?filter=` query value; unknown values mean "all"
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("upcoming") => EventFilter::Upcoming,
            Some("completed") => EventFilter::Completed,
            Some("pending") => EventFilter::Pending,
            _ => EventFilter::All,
        }
    }
}

/// Result ordering by `date_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

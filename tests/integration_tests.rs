//! Integration tests for the warehouse scheduling board

use std::sync::Arc;

use chrono::{Duration, Utc};
use warehouse_scheduler::{
    events_to_csv, BoardError, EventChanges, EventDraft, EventFilter, EventStore, ScheduleBoard,
};

fn setup_board() -> ScheduleBoard {
    let store = Arc::new(EventStore::open_in_memory().unwrap());
    ScheduleBoard::new(store)
}

fn hours_from_now(hours: i64) -> String {
    (Utc::now() + Duration::hours(hours)).to_rfc3339()
}

fn client_visit(date_time: &str) -> EventDraft {
    EventDraft {
        event_type: Some("Client Visit".to_string()),
        date_time: Some(date_time.to_string()),
        created_by: Some("a@b.com".to_string()),
        ..Default::default()
    }
}

fn truck_arrival(load_type: &str, date_time: &str) -> EventDraft {
    EventDraft {
        event_type: Some("Truck Arrival".to_string()),
        truck_plate: Some("SF1234AB".to_string()),
        purpose: Some("Loading".to_string()),
        load_type: Some(load_type.to_string()),
        date_time: Some(date_time.to_string()),
        created_by: Some("coordinator@example.com".to_string()),
        notes: Some("Priority shipment".to_string()),
    }
}

#[test]
fn test_create_requires_type_date_and_creator() {
    let board = setup_board();

    let drafts = [
        EventDraft::default(),
        EventDraft {
            date_time: Some(hours_from_now(1)),
            created_by: Some("a@b.com".to_string()),
            ..Default::default()
        },
        EventDraft {
            event_type: Some("Client Visit".to_string()),
            created_by: Some("a@b.com".to_string()),
            ..Default::default()
        },
        EventDraft {
            event_type: Some("Client Visit".to_string()),
            date_time: Some(hours_from_now(1)),
            created_by: Some(String::new()),
            ..Default::default()
        },
    ];

    for draft in &drafts {
        let result = board.create_event(draft);
        assert!(matches!(
            result,
            Err(BoardError::Validation {
                code: "missing_required_fields",
                ..
            })
        ));
    }
}

#[test]
fn test_create_truck_arrival_requires_truck_fields() {
    let board = setup_board();

    let mut draft = truck_arrival("FTL", &hours_from_now(2));
    draft.load_type = None;
    let result = board.create_event(&draft);
    assert!(matches!(
        result,
        Err(BoardError::Validation {
            code: "missing_truck_fields",
            ..
        })
    ));

    let mut draft = truck_arrival("FTL", &hours_from_now(2));
    draft.truck_plate = Some(String::new());
    let result = board.create_event(&draft);
    assert!(matches!(
        result,
        Err(BoardError::Validation {
            code: "missing_truck_fields",
            ..
        })
    ));

    // Client visits carry no truck fields at all
    let result = board.create_event(&client_visit(&hours_from_now(2)));
    assert!(result.is_ok());
}

#[test]
fn test_duration_derivation() {
    let board = setup_board();

    let ftl = board
        .create_event(&truck_arrival("FTL", &hours_from_now(2)))
        .unwrap();
    assert_eq!(ftl.duration, 60);

    let ptl = board
        .create_event(&truck_arrival("PTL", &hours_from_now(3)))
        .unwrap();
    assert_eq!(ptl.duration, 30);

    // Absent load type gets the default as well
    let visit = board.create_event(&client_visit(&hours_from_now(4))).unwrap();
    assert_eq!(visit.duration, 30);
}

#[test]
fn test_upcoming_excludes_past_and_completed() {
    let board = setup_board();

    board.create_event(&client_visit(&hours_from_now(-2))).unwrap();
    let future = board.create_event(&client_visit(&hours_from_now(2))).unwrap();

    let upcoming = board.list_events(EventFilter::Upcoming).unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, future.id);

    board.mark_completed(future.id).unwrap();
    let upcoming = board.list_events(EventFilter::Upcoming).unwrap();
    assert!(upcoming.is_empty());
}

#[test]
fn test_pending_and_completed_partition() {
    let board = setup_board();

    let first = board.create_event(&client_visit(&hours_from_now(1))).unwrap();
    let second = board.create_event(&client_visit(&hours_from_now(2))).unwrap();
    board.mark_completed(first.id).unwrap();

    let completed = board.list_events(EventFilter::Completed).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, first.id);
    assert!(completed[0].completed);

    let pending = board.list_events(EventFilter::Pending).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second.id);
}

#[test]
fn test_listing_is_sorted_soonest_first() {
    let board = setup_board();

    let later = board.create_event(&client_visit(&hours_from_now(6))).unwrap();
    let sooner = board.create_event(&client_visit(&hours_from_now(1))).unwrap();
    let middle = board.create_event(&client_visit(&hours_from_now(3))).unwrap();

    let events = board.list_events(EventFilter::All).unwrap();
    let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![sooner.id, middle.id, later.id]);

    // Export re-sorts latest first
    let exported = board.export_events().unwrap();
    let ids: Vec<i64> = exported.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![later.id, middle.id, sooner.id]);
}

#[test]
fn test_update_requires_at_least_one_field() {
    let board = setup_board();
    let created = board.create_event(&client_visit(&hours_from_now(1))).unwrap();

    let result = board.update_event(created.id, &EventChanges::default());
    assert!(matches!(
        result,
        Err(BoardError::Validation {
            code: "no_fields",
            ..
        })
    ));
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let board = setup_board();

    let result = board.update_event(
        999,
        &EventChanges {
            completed: Some(true),
            deleted: None,
        },
    );
    assert!(matches!(result, Err(BoardError::NotFound { id: 999 })));

    let result = board.soft_delete(999);
    assert!(matches!(result, Err(BoardError::NotFound { id: 999 })));
}

#[test]
fn test_soft_delete_twice_is_a_no_op() {
    let board = setup_board();
    let created = board.create_event(&client_visit(&hours_from_now(1))).unwrap();

    board.soft_delete(created.id).unwrap();
    // The row still matches by id, so the repeat call succeeds without
    // changing anything further
    board.soft_delete(created.id).unwrap();

    assert!(board.list_events(EventFilter::All).unwrap().is_empty());
    let exported = board.export_events().unwrap();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].deleted);
}

#[test]
fn test_completed_then_deleted_keeps_both_flags() {
    let board = setup_board();
    let created = board.create_event(&client_visit(&hours_from_now(1))).unwrap();

    board.mark_completed(created.id).unwrap();
    board.soft_delete(created.id).unwrap();

    let exported = board.export_events().unwrap();
    assert!(exported[0].completed);
    assert!(exported[0].deleted);
}

#[test]
fn test_full_lifecycle_end_to_end() {
    let board = setup_board();

    let created = board.create_event(&client_visit(&hours_from_now(1))).unwrap();
    assert_eq!(created.duration, 30);

    let later = board.create_event(&client_visit(&hours_from_now(5))).unwrap();

    // Appears in upcoming, sorted before the later event
    let upcoming = board.list_events(EventFilter::Upcoming).unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].id, created.id);
    assert_eq!(upcoming[1].id, later.id);

    // Completing moves it from upcoming to completed
    board.mark_completed(created.id).unwrap();
    let upcoming = board.list_events(EventFilter::Upcoming).unwrap();
    assert!(upcoming.iter().all(|e| e.id != created.id));
    let completed = board.list_events(EventFilter::Completed).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, created.id);

    // Soft-deleting hides it from every list but not from the export
    board.soft_delete(created.id).unwrap();
    let all = board.list_events(EventFilter::All).unwrap();
    assert!(all.iter().all(|e| e.id != created.id));
    let completed = board.list_events(EventFilter::Completed).unwrap();
    assert!(completed.is_empty());

    let exported = board.export_events().unwrap();
    assert_eq!(exported.len(), 2);
    let deleted_row = exported.iter().find(|e| e.id == created.id).unwrap();
    assert!(deleted_row.deleted);

    let csv = events_to_csv(&exported);
    let deleted_line = csv
        .lines()
        .find(|line| line.starts_with(&format!("{},", created.id)))
        .unwrap();
    assert!(deleted_line.ends_with(",Yes"));
}

#[test]
fn test_events_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("events.db");
    let db_path = db_path.to_str().unwrap();

    let id = {
        let store = Arc::new(EventStore::open(db_path).unwrap());
        let board = ScheduleBoard::new(store);
        board
            .create_event(&truck_arrival("FTL", &hours_from_now(2)))
            .unwrap()
            .id
    };

    let store = Arc::new(EventStore::open(db_path).unwrap());
    let board = ScheduleBoard::new(store);
    let events = board.list_events(EventFilter::All).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].duration, 60);
    assert_eq!(events[0].load_type.as_deref(), Some("FTL"));
    assert!(!events[0].created_at.is_empty());
}

use super::*;
use crate::net::types::{BeachReport, ConservationAction, Sighting};

fn sighting(id: i64, species_type: &str) -> Sighting {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "species_name": format!("specimen {id}"),
        "species_type": species_type,
        "date_spotted": "2024-05-01",
        "user_name": "Ana",
    }))
    .unwrap()
}

fn loaded(items: Vec<Sighting>) -> RecordList<Sighting> {
    let mut list = RecordList::default();
    list.loaded(Ok(items));
    list
}

// =============================================================
// Loading
// =============================================================

#[test]
fn record_list_defaults_to_loading() {
    let list: RecordList<Sighting> = RecordList::default();
    assert!(list.loading);
    assert!(list.items.is_empty());
    assert_eq!(list.filter, Filter::All);
}

#[test]
fn loaded_failure_keeps_items_and_records_error() {
    let mut list: RecordList<BeachReport> = RecordList::default();
    list.loaded(Err(ErrorMessage::generic()));
    assert!(!list.loading);
    assert_eq!(list.error, Some(ErrorMessage::generic()));
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_case_insensitively() {
    let list = {
        let mut list = loaded(vec![sighting(1, "Whale"), sighting(2, "Dolphin"), sighting(3, "whale")]);
        list.set_filter(Filter::Only("WHALE".to_owned()));
        list
    };
    let ids: Vec<i64> = list.visible().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn filter_all_shows_everything() {
    let list = loaded(vec![sighting(1, "Whale"), sighting(2, "Dolphin")]);
    assert_eq!(list.visible().len(), 2);
}

#[test]
fn facets_count_in_first_seen_order() {
    let list = loaded(vec![sighting(1, "Whale"), sighting(2, "Dolphin"), sighting(3, "Whale")]);
    assert_eq!(list.facets(), vec![("Whale".to_owned(), 2), ("Dolphin".to_owned(), 1)]);
}

#[test]
fn facets_empty_for_unfiltered_collections() {
    let report: BeachReport = serde_json::from_value(serde_json::json!({
        "id": 1, "beach_name": "Coronado", "water_quality": 4, "pollution_level": 4, "report_date": "2024-05-01"
    }))
    .unwrap();
    let mut list = RecordList::default();
    list.loaded(Ok(vec![report]));
    assert!(list.facets().is_empty());
}

#[test]
fn action_filter_uses_action_type() {
    let action: ConservationAction = serde_json::from_value(serde_json::json!({
        "id": 5, "action_type": "beach_cleanup", "title": "Sunday sweep", "participants": 8, "date_completed": "2024-05-01"
    }))
    .unwrap();
    let mut list = RecordList::default();
    list.loaded(Ok(vec![action]));
    list.set_filter(Filter::Only("monitoring".to_owned()));
    assert!(list.visible().is_empty());
    list.set_filter(Filter::Only("beach_cleanup".to_owned()));
    assert_eq!(list.visible().len(), 1);
}

// =============================================================
// Two-phase delete
// =============================================================

#[test]
fn delete_removes_only_after_confirmation() {
    let mut list = loaded(vec![sighting(1, "Whale"), sighting(2, "Dolphin")]);
    assert!(list.begin_delete(1));
    assert!(list.is_pending(1));
    assert_eq!(list.items.len(), 2);

    list.confirm_delete(1);
    assert!(!list.is_pending(1));
    assert_eq!(list.items.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn failed_delete_keeps_record_and_surfaces_error() {
    let mut list = loaded(vec![sighting(1, "Whale")]);
    assert!(list.begin_delete(1));
    list.fail_delete(1, ErrorMessage::Text("Not authorized".to_owned()));
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.pending_delete, None);
    assert_eq!(list.error, Some(ErrorMessage::Text("Not authorized".to_owned())));
}

#[test]
fn begin_delete_rejects_unknown_or_concurrent() {
    let mut list = loaded(vec![sighting(1, "Whale"), sighting(2, "Dolphin")]);
    assert!(!list.begin_delete(99));
    assert!(list.begin_delete(1));
    assert!(!list.begin_delete(2));
}

// =============================================================
// Ownership
// =============================================================

#[test]
fn owner_requires_matching_names() {
    assert!(is_owner(Some("Ana"), Some("Ana")));
    assert!(!is_owner(Some("Ana"), Some("Ben")));
    assert!(!is_owner(None, Some("Ana")));
    assert!(!is_owner(Some("Ana"), None));
}

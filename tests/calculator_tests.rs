use chrono::{TimeZone, Utc};
use meeting_time_planner::services::calculator::{
    meeting_times, Classification, UNAVAILABLE_TIME,
};
use meeting_time_planner::services::clock::FixedClock;
use meeting_time_planner::store::SelectionStore;

// A January date, safely away from any DST transition. Noon UTC keeps the
// civil date stable across the zones used below.
fn winter_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap())
}

fn summer_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap())
}

fn classification_at(base_hour: f64) -> Classification {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");
    let slots = meeting_times(base_hour, &store, &winter_clock());
    slots[0].classification.unwrap()
}

#[test]
fn test_empty_list_yields_empty_result() {
    let store = SelectionStore::new();
    assert!(meeting_times(14.5, &store, &winter_clock()).is_empty());
}

#[test]
fn test_single_entry_afternoon() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");

    let slots = meeting_times(14.5, &store, &winter_clock());

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].location_name, "America/New_York");
    assert_eq!(slots[0].display_time, "2:30 PM");
    assert_eq!(slots[0].classification, Some(Classification::Good));
}

#[test]
fn test_reference_early_morning_is_bad() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");

    let slots = meeting_times(3.0, &store, &winter_clock());

    assert_eq!(slots[0].display_time, "3:00 AM");
    assert_eq!(slots[0].classification, Some(Classification::Bad));
}

#[test]
fn test_one_slot_per_entry_in_list_order() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "HQ");
    store.add("Europe/London", "");
    store.add("Asia/Tokyo", "Tokyo Office");

    let slots = meeting_times(9.0, &store, &winter_clock());

    let names: Vec<&str> = slots.iter().map(|s| s.location_name.as_str()).collect();
    assert_eq!(names, vec!["HQ", "Europe/London", "Tokyo Office"]);
}

#[test]
fn test_cross_timezone_conversion_winter() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");
    store.add("Europe/London", "");
    store.add("Asia/Tokyo", "");

    // 9:00 AM EST is 14:00 GMT and 23:00 JST
    let slots = meeting_times(9.0, &store, &winter_clock());

    assert_eq!(slots[0].display_time, "9:00 AM");
    assert_eq!(slots[0].classification, Some(Classification::Good));
    assert_eq!(slots[1].display_time, "2:00 PM");
    assert_eq!(slots[1].classification, Some(Classification::Good));
    assert_eq!(slots[2].display_time, "11:00 PM");
    assert_eq!(slots[2].classification, Some(Classification::Bad));
}

#[test]
fn test_cross_timezone_conversion_summer_dst() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");
    store.add("Europe/London", "");

    // 9:00 AM EDT is 13:00 UTC and 2:00 PM BST
    let slots = meeting_times(9.0, &store, &summer_clock());

    assert_eq!(slots[1].display_time, "2:00 PM");
    assert_eq!(slots[1].classification, Some(Classification::Good));
}

#[test]
fn test_unknown_timezone_degrades_only_that_row() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");
    store.add("Not/AZone", "Nowhere");
    store.add("Europe/London", "");

    let slots = meeting_times(9.0, &store, &winter_clock());

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[1].location_name, "Nowhere");
    assert_eq!(slots[1].display_time, UNAVAILABLE_TIME);
    assert_eq!(slots[1].classification, None);
    assert!(slots[0].classification.is_some());
    assert!(slots[2].classification.is_some());
}

#[test]
fn test_unknown_reference_degrades_all_rows() {
    let mut store = SelectionStore::new();
    store.add("Not/AZone", "");
    store.add("America/New_York", "");

    let slots = meeting_times(9.0, &store, &winter_clock());

    assert_eq!(slots.len(), 2);
    for slot in &slots {
        assert_eq!(slot.display_time, UNAVAILABLE_TIME);
        assert_eq!(slot.classification, None);
    }
    assert_eq!(slots[0].location_name, "Not/AZone");
    assert_eq!(slots[1].location_name, "America/New_York");
}

#[test]
fn test_recompute_is_idempotent() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");
    store.add("Asia/Kolkata", "");

    let clock = winter_clock();
    assert_eq!(
        meeting_times(10.5, &store, &clock),
        meeting_times(10.5, &store, &clock)
    );
}

#[test]
fn test_classification_boundary_hours() {
    // bad is checked before warning; 7 and 22 fall through to warning,
    // 9 and 18 fall through to good
    assert_eq!(classification_at(7.0), Classification::Warning);
    assert_eq!(classification_at(22.0), Classification::Warning);
    assert_eq!(classification_at(9.0), Classification::Good);
    assert_eq!(classification_at(18.0), Classification::Good);
    assert_eq!(classification_at(6.0), Classification::Bad);
    assert_eq!(classification_at(23.0), Classification::Bad);
    assert_eq!(classification_at(8.5), Classification::Warning);
    assert_eq!(classification_at(19.0), Classification::Warning);
}

#[test]
fn test_from_local_hour_boundaries() {
    assert_eq!(Classification::from_local_hour(7), Classification::Warning);
    assert_eq!(Classification::from_local_hour(9), Classification::Good);
    assert_eq!(Classification::from_local_hour(18), Classification::Good);
    assert_eq!(Classification::from_local_hour(22), Classification::Warning);
    assert_eq!(Classification::from_local_hour(0), Classification::Bad);
    assert_eq!(Classification::from_local_hour(23), Classification::Bad);
}

#[test]
fn test_minute_rounding_carries_into_hour() {
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");

    let slots = meeting_times(13.9999, &store, &winter_clock());
    assert_eq!(slots[0].display_time, "2:00 PM");
}

#[test]
fn test_dst_gap_resolves_forward() {
    // US DST starts 2025-03-09: 2:00-2:59 AM does not exist in New York
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 9, 18, 0, 0).unwrap());
    let mut store = SelectionStore::new();
    store.add("America/New_York", "");

    let slots = meeting_times(2.5, &store, &clock);

    assert_eq!(slots[0].display_time, "3:00 AM");
    assert_eq!(slots[0].classification, Some(Classification::Bad));
}

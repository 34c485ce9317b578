// Native tests for the 24-hour daily-routine dataset and lookup.

use std::collections::HashSet;

use garden_clock::{daily_event, DAILY_EVENTS};

#[test]
fn dataset_hours_are_unique_and_in_range() {
    let mut seen = HashSet::new();
    for &(hour, event, routine) in DAILY_EVENTS {
        assert!(hour < 24, "hour {hour} out of range");
        assert!(seen.insert(hour), "duplicate hour {hour} in DAILY_EVENTS");
        assert!(!event.is_empty(), "empty event label at hour {hour}");
        assert!(!routine.is_empty(), "empty routine text at hour {hour}");
    }
}

#[test]
fn dataset_covers_the_waking_day() {
    for hour in 6..=22u8 {
        assert!(
            DAILY_EVENTS.iter().any(|&(h, _, _)| h == hour),
            "no event scheduled at hour {hour}"
        );
    }
}

#[test]
fn lookup_finds_scheduled_hours_only() {
    let wake_up = daily_event(6, 0).expect("6:00 has an event");
    assert_eq!(wake_up.hour, 6);
    assert!(wake_up.event.contains("Wake Up"));

    // Overnight hours have no routine
    assert!(daily_event(3, 0).is_none());
    assert!(daily_event(23, 59).is_none());
}

#[test]
fn near_flag_tracks_the_first_quarter_hour() {
    assert!(daily_event(7, 0).unwrap().is_near);
    assert!(daily_event(7, 15).unwrap().is_near);
    assert!(!daily_event(7, 16).unwrap().is_near);
    assert!(!daily_event(7, 45).unwrap().is_near);
}

#[test]
fn out_of_range_hours_wrap_into_the_day() {
    // 30 o'clock wraps to 6:00
    assert_eq!(daily_event(30, 0).unwrap().hour, 6);
    assert_eq!(daily_event(-5, 0).unwrap().hour, 19);
}

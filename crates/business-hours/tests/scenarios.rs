//! End-to-end scenarios over the reference calendar:
//! Mon–Tue 09:00–12:00 & 13:00–18:00, Wed 09:00–12:00, Thu–Fri 09:00–18:00,
//! weekend closed, holidays 2024-03-08..=2024-03-10.

mod common;

use business_hours::{Calendar, CalendarConfig, CalendarError, GapPolicy};
use chrono::{TimeZone, Utc};
use common::{at, calendar, day, SAMPLE_CONFIG};

#[test]
fn test_next_working_time_skips_holidays_and_weekend() {
    let calendar = calendar(GapPolicy::NextDay);
    assert_eq!(
        calendar.next_working_time(at("2024-03-08T10:00:00")).unwrap(),
        at("2024-03-11T09:00:00")
    );
}

#[test]
fn test_next_working_day() {
    let calendar = calendar(GapPolicy::NextDay);
    assert_eq!(
        calendar.next_working_day(day("2024-03-08")).unwrap(),
        day("2024-03-11")
    );
}

#[test]
fn test_classification() {
    let calendar = calendar(GapPolicy::NextDay);
    assert!(calendar.is_working_day(day("2024-03-11")));
    assert!(!calendar.is_working_day(day("2024-03-08")));
    assert!(calendar.is_working_time(at("2024-03-11T10:00:00")));
    assert!(!calendar.is_working_time(at("2024-03-11T20:00:00")));
    assert!(calendar.is_holiday(day("2024-03-08")));
    assert!(!calendar.is_holiday(day("2024-03-11")));
}

#[test]
fn test_add_time() {
    let calendar = calendar(GapPolicy::NextDay);
    assert_eq!(
        calendar.add_time(at("2024-03-11T10:00:00"), 3600).unwrap(),
        at("2024-03-11T11:00:00")
    );
    assert_eq!(
        calendar.add_time(at("2024-03-11T19:30:00"), 600).unwrap(),
        at("2024-03-12T09:10:00")
    );
}

#[test]
fn test_subtract_time() {
    let calendar = calendar(GapPolicy::NextDay);
    assert_eq!(
        calendar.subtract_time(at("2024-03-11T14:00:00"), 3600).unwrap(),
        at("2024-03-11T13:00:00")
    );
    assert_eq!(
        calendar.subtract_time(at("2024-03-11T07:30:00"), 600).unwrap(),
        at("2024-03-07T17:50:00")
    );
}

#[test]
fn test_elapsed_and_remaining() {
    let calendar = calendar(GapPolicy::NextDay);
    assert_eq!(calendar.elapsed_working_time(at("2024-03-11T10:30:00")), 5400);
    assert_eq!(calendar.remaining_working_time(at("2024-03-11T10:30:00")), 5400);
    assert_eq!(calendar.remaining_working_time(at("2024-03-11T12:00:00")), 0);
    assert_eq!(calendar.remaining_working_time(at("2024-03-14T18:00:00")), 0);
}

#[test]
fn test_diff() {
    let calendar = calendar(GapPolicy::NextDay);
    assert_eq!(
        calendar
            .diff(at("2024-03-11T09:00:00"), at("2024-03-12T12:00:00"))
            .unwrap(),
        21_600
    );
}

#[test]
fn test_diff_boundaries() {
    let calendar = calendar(GapPolicy::NextWindow);
    // Both ends on window edges: every second of 09:00-12:00 counted once
    assert_eq!(
        calendar
            .diff(at("2024-03-11T09:00:00"), at("2024-03-11T12:00:00"))
            .unwrap(),
        10_800
    );
    // Spanning the lunch break: the gap contributes nothing
    assert_eq!(
        calendar
            .diff(at("2024-03-11T11:00:00"), at("2024-03-11T14:00:00"))
            .unwrap(),
        7200
    );
    // Both ends inside the same gap
    assert_eq!(
        calendar
            .diff(at("2024-03-11T12:10:00"), at("2024-03-11T12:50:00"))
            .unwrap(),
        0
    );
}

#[test]
fn test_timezone_config() {
    let json = SAMPLE_CONFIG.replacen('{', r#"{ "timezone": "America/New_York","#, 1);
    let config = CalendarConfig::from_json_str(&json).unwrap();
    let summer = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    let calendar = Calendar::new_at(&config, summer).unwrap();
    assert_eq!(calendar.utc_offset_minutes(), -240);

    // 14:00 UTC on Monday 2024-03-11 is 10:00 in the captured offset
    let local = calendar.to_local(Utc.with_ymd_and_hms(2024, 3, 11, 14, 0, 0).unwrap());
    assert!(calendar.is_working_time(local));
}

#[test]
fn test_all_holiday_calendar_reports_no_working_day() {
    let wednesdays_only = r#"{"hours": {"3": [{"start": "10:00", "end": "11:00"}]}}"#;
    let mut config = CalendarConfig::from_json_str(wednesdays_only).unwrap();
    let mut wednesday = day("2024-03-13");
    while wednesday < day("2025-06-01") {
        config = config.with_holiday(wednesday);
        wednesday = wednesday + chrono::Duration::days(7);
    }
    let calendar = Calendar::with_offset_minutes(&config, 0).unwrap();

    let err = calendar.add_time(at("2024-03-12T10:00:00"), 60).unwrap_err();
    assert!(matches!(err, CalendarError::NoWorkingDayFound(_)), "{err}");
}

#[test]
fn test_invalid_configurations() {
    let bad_format = r#"{"hours": {"1": [{"start": "9:00", "end": "17:00"}]}}"#;
    let config = CalendarConfig::from_json_str(bad_format).unwrap();
    assert!(matches!(
        Calendar::new(&config),
        Err(CalendarError::InvalidWindowFormat(_))
    ));

    let inverted = r#"{"hours": {"1": [{"start": "17:00", "end": "09:00"}]}}"#;
    let config = CalendarConfig::from_json_str(inverted).unwrap();
    assert!(matches!(
        Calendar::new(&config),
        Err(CalendarError::InvalidConfiguration(_))
    ));

    let closed = r#"{"hours": {"0": null, "1": []}, "holidays": []}"#;
    let config = CalendarConfig::from_json_str(closed).unwrap();
    assert!(matches!(
        Calendar::new(&config),
        Err(CalendarError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_shared_across_threads() {
    let calendar = std::sync::Arc::new(calendar(GapPolicy::NextDay));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let calendar = std::sync::Arc::clone(&calendar);
            std::thread::spawn(move || calendar.add_time(at("2024-03-11T10:00:00"), i * 3600))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(
        results,
        vec![
            at("2024-03-11T10:00:00"),
            at("2024-03-11T11:00:00"),
            at("2024-03-11T12:00:00"),
            at("2024-03-12T10:00:00"),
        ]
    );
}

use business_hours::{Calendar, CalendarConfig, GapPolicy};
use chrono::{NaiveDate, NaiveDateTime};

#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"{
    "hours": {
        "0": null,
        "1": [{ "start": "09:00", "end": "12:00" }, { "start": "13:00", "end": "18:00" }],
        "2": [{ "start": "09:00", "end": "12:00" }, { "start": "13:00", "end": "18:00" }],
        "3": [{ "start": "09:00", "end": "12:00" }],
        "4": [{ "start": "09:00", "end": "18:00" }],
        "5": [{ "start": "09:00", "end": "18:00" }],
        "6": null
    },
    "holidays": ["2024-03-08", "2024-03-09", "2024-03-10"]
}"#;

pub fn calendar(policy: GapPolicy) -> Calendar {
    let config = CalendarConfig::from_json_str(SAMPLE_CONFIG)
        .unwrap()
        .with_gap_policy(policy);
    Calendar::with_offset_minutes(&config, 0).unwrap()
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[allow(dead_code)]
pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

//! # business-hours
//!
//! Business-hours calendar engine.
//!
//! Decides whether an instant falls inside configured working hours and does
//! working-time arithmetic ("N working seconds from now") over per-weekday
//! working windows and a holiday calendar, skipping nights, weekends and
//! holidays.
//!
//! A [`Calendar`] is built once from a [`CalendarConfig`] and is immutable
//! afterwards: every operation is a pure function of the calendar and the
//! instants passed in, so a calendar can be shared freely across threads.
//! Instants are [`chrono::NaiveDateTime`] wall-clock values in the calendar's
//! fixed UTC offset.
//!
//! ## Modules
//!
//! - [`window`] — `"HH:mm"` working windows and boundary resolution
//! - [`config`] — Serializable calendar configuration and validation
//! - [`timezone`] — One-shot IANA timezone → fixed minute offset
//! - [`calendar`] — The immutable [`Calendar`]
//! - [`classify`] — Holiday, working-day and working-time predicates
//! - [`walker`] — Next/previous working day and working time
//! - [`duration`] — Remaining/elapsed time, add, subtract, diff
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use business_hours::{Calendar, CalendarConfig, WindowSpec};
//! use chrono::NaiveDate;
//!
//! let config = CalendarConfig::new()
//!     .with_windows(1, vec![WindowSpec::new("09:00", "17:00")])
//!     .with_windows(2, vec![WindowSpec::new("09:00", "17:00")]);
//! let calendar = Calendar::with_offset_minutes(&config, 0).unwrap();
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! let due = calendar
//!     .add_time(monday.and_hms_opt(16, 0, 0).unwrap(), 2 * 3600)
//!     .unwrap();
//! assert_eq!(due, monday.succ_opt().unwrap().and_hms_opt(10, 0, 0).unwrap());
//! ```

pub mod calendar;
pub mod classify;
pub mod config;
pub mod duration;
pub mod error;
pub mod timezone;
pub mod walker;
pub mod window;

pub use calendar::Calendar;
pub use config::{CalendarConfig, GapPolicy, WeekHours, WindowSpec, DAYS_IN_WEEK};
pub use error::{CalendarError, Result};
pub use timezone::resolve_offset_minutes;
pub use walker::MAX_WALK_DAYS;
pub use window::{parse_time_of_day, WorkingWindow};

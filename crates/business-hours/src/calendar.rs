//! The immutable business-hours calendar.
//!
//! A [`Calendar`] is built once from a [`CalendarConfig`] and never changes
//! afterwards. Every query (see [`classify`](crate::classify),
//! [`walker`](crate::walker), [`duration`](crate::duration)) is a pure
//! function of the calendar and the instants passed in; nothing reads the
//! system clock except [`Calendar::new`], once, to pick the timezone offset.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::config::{CalendarConfig, GapPolicy, WeekHours};
use crate::error::CalendarError;
use crate::timezone::{fixed_offset, resolve_offset_minutes};
use crate::window::WorkingWindow;

#[derive(Debug, Clone)]
pub struct Calendar {
    week: WeekHours,
    holidays: BTreeSet<NaiveDate>,
    offset_minutes: i32,
    offset: FixedOffset,
    gap_policy: GapPolicy,
}

impl Calendar {
    /// Validate `config` and build a calendar.
    ///
    /// The timezone (if any) is resolved to a fixed offset using the current
    /// UTC instant. Use [`Calendar::new_at`] for a deterministic offset.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindowFormat`],
    /// [`CalendarError::InvalidConfiguration`] or
    /// [`CalendarError::InvalidTimezone`] on a bad configuration.
    pub fn new(config: &CalendarConfig) -> Result<Self, CalendarError> {
        Self::new_at(config, Utc::now())
    }

    /// Validate `config` and build a calendar, resolving the timezone offset
    /// as it stands at `reference`.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_hours::{Calendar, CalendarConfig, WindowSpec};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let config = CalendarConfig::new()
    ///     .with_windows(1, vec![WindowSpec::new("09:00", "17:00")])
    ///     .with_timezone("America/New_York");
    /// let winter = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    /// let calendar = Calendar::new_at(&config, winter).unwrap();
    /// assert_eq!(calendar.utc_offset_minutes(), -300);
    /// ```
    pub fn new_at(config: &CalendarConfig, reference: DateTime<Utc>) -> Result<Self, CalendarError> {
        let offset_minutes = match &config.timezone {
            Some(name) => resolve_offset_minutes(name, reference)?,
            None => 0,
        };
        Self::build(config, offset_minutes)
    }

    /// Validate `config` and build a calendar with an explicit offset in
    /// minutes east of UTC. The config's `timezone` field is ignored.
    pub fn with_offset_minutes(
        config: &CalendarConfig,
        offset_minutes: i32,
    ) -> Result<Self, CalendarError> {
        Self::build(config, offset_minutes)
    }

    fn build(config: &CalendarConfig, offset_minutes: i32) -> Result<Self, CalendarError> {
        let week = config.week_hours()?;
        let offset = fixed_offset(offset_minutes)?;
        let holidays: BTreeSet<NaiveDate> = config.holidays.iter().copied().collect();

        debug!(
            offset_minutes,
            working_weekdays = week.iter().filter(|w| !w.is_empty()).count(),
            holidays = holidays.len(),
            gap_policy = ?config.gap_policy,
            "built business-hours calendar"
        );

        Ok(Self {
            week,
            holidays,
            offset_minutes,
            offset,
            gap_policy: config.gap_policy,
        })
    }

    /// Fixed offset from UTC in minutes, captured at construction.
    pub fn utc_offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    pub fn fixed_offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn gap_policy(&self) -> GapPolicy {
        self.gap_policy
    }

    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }

    /// Configured windows for a day index (0 = Sunday), ignoring holidays.
    ///
    /// Out-of-range indices yield an empty slice.
    pub fn weekday_windows(&self, day: usize) -> &[WorkingWindow] {
        self.week.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Express a UTC instant as local wall-clock time in the calendar's offset.
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }

    /// Interpret a local wall-clock instant in the calendar's offset.
    pub fn to_utc(&self, instant: NaiveDateTime) -> Result<DateTime<Utc>, CalendarError> {
        self.offset
            .from_local_datetime(&instant)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| CalendarError::OutOfRange(format!("'{}'", instant)))
    }
}

/// The calendar used throughout the unit tests:
/// Mon–Tue 09:00–12:00 & 13:00–18:00, Wed 09:00–12:00, Thu–Fri 09:00–18:00,
/// weekend closed, holidays 2024-03-08..=2024-03-10.
#[cfg(test)]
pub(crate) fn sample_config() -> CalendarConfig {
    use crate::config::WindowSpec;

    let split = || {
        vec![
            WindowSpec::new("09:00", "12:00"),
            WindowSpec::new("13:00", "18:00"),
        ]
    };
    CalendarConfig::new()
        .with_closed_day(0)
        .with_windows(1, split())
        .with_windows(2, split())
        .with_windows(3, vec![WindowSpec::new("09:00", "12:00")])
        .with_windows(4, vec![WindowSpec::new("09:00", "18:00")])
        .with_windows(5, vec![WindowSpec::new("09:00", "18:00")])
        .with_closed_day(6)
        .with_holiday(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap())
        .with_holiday(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        .with_holiday(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
}

#[cfg(test)]
pub(crate) fn sample_calendar() -> Calendar {
    Calendar::with_offset_minutes(&sample_config(), 0).unwrap()
}

/// Parse `"YYYY-MM-DDTHH:MM:SS"` in tests.
#[cfg(test)]
pub(crate) fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[cfg(test)]
pub(crate) fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ── Tests ───────────────────────────────────────────────────────────────────

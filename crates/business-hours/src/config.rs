//! Calendar configuration.
//!
//! [`CalendarConfig`] is the serde-facing description of a calendar: per-day
//! working windows as `"HH:mm"` strings, holiday dates, an optional IANA
//! timezone and the [`GapPolicy`]. It is validated and frozen into a
//! [`Calendar`](crate::Calendar) by [`Calendar::new`](crate::Calendar::new).
//!
//! The JSON shape:
//!
//! ```json
//! {
//!   "hours": {
//!     "0": null,
//!     "1": [{ "start": "09:00", "end": "12:00" }, { "start": "13:00", "end": "18:00" }]
//!   },
//!   "holidays": ["2024-03-08"],
//!   "timezone": "Europe/Paris",
//!   "gap_policy": "next_day"
//! }
//! ```
//!
//! Day keys are 0 (Sunday) through 6 (Saturday). Missing keys are closed days.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::window::WorkingWindow;

/// Number of weekday slots (0 = Sunday … 6 = Saturday).
pub const DAYS_IN_WEEK: usize = 7;

/// Validated per-weekday windows, indexed by `num_days_from_sunday`.
pub type WeekHours = [Vec<WorkingWindow>; DAYS_IN_WEEK];

/// One configured window, still in its string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub start: String,
    pub end: String,
}

impl WindowSpec {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Where the walker goes when it leaves a non-working instant or a window end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Jump to the first window of the next working day (backward: the last
    /// window of the previous working day), even if a later window exists on
    /// the current day.
    #[default]
    NextDay,
    /// Try the remaining windows of the current day before moving on to the
    /// next (previous) working day.
    NextWindow,
}

/// Serializable calendar description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Day index (0 = Sunday) → ordered windows, or `null` for a closed day.
    #[serde(default)]
    pub hours: BTreeMap<u8, Option<Vec<WindowSpec>>>,
    /// Holiday dates. Time-of-day and timezone play no part in matching.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// IANA timezone, resolved once into a fixed offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub gap_policy: GapPolicy,
}

impl CalendarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CalendarError> {
        serde_json::from_str(json).map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CalendarError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CalendarError::Config(format!("'{}': {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Set the windows for day index `day` (0 = Sunday).
    pub fn with_windows(mut self, day: u8, windows: Vec<WindowSpec>) -> Self {
        self.hours.insert(day, Some(windows));
        self
    }

    /// Mark day index `day` as closed.
    pub fn with_closed_day(mut self, day: u8) -> Self {
        self.hours.insert(day, None);
        self
    }

    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.push(date);
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_gap_policy(mut self, policy: GapPolicy) -> Self {
        self.gap_policy = policy;
        self
    }

    /// Parse and check every window, producing the fixed 7-slot week.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidWindowFormat`] for a malformed `"HH:mm"`
    /// - [`CalendarError::InvalidConfiguration`] for a day index above 6, a
    ///   window whose end is not after its start, or a week with no windows
    pub fn week_hours(&self) -> Result<WeekHours, CalendarError> {
        let mut week: WeekHours = Default::default();

        for (&day, windows) in &self.hours {
            let slot = week.get_mut(day as usize).ok_or_else(|| {
                CalendarError::InvalidConfiguration(format!(
                    "day index {} is outside 0-6",
                    day
                ))
            })?;

            for spec in windows.iter().flatten() {
                let window = WorkingWindow::parse(&spec.start, &spec.end)?;
                if window.end <= window.start {
                    return Err(CalendarError::InvalidConfiguration(format!(
                        "day {}: window {}-{} must end after it starts",
                        day, spec.start, spec.end
                    )));
                }
                slot.push(window);
            }
        }

        if week.iter().all(Vec::is_empty) {
            return Err(CalendarError::InvalidConfiguration(
                "no weekday has working windows".to_string(),
            ));
        }

        Ok(week)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Working-time accounting and arithmetic.
//!
//! # Window tests
//!
//! - [`Calendar::remaining_working_time`] matches a window as `[start, end)`:
//!   at a window's end instant nothing remains.
//! - [`Calendar::elapsed_working_time`] uses the same `[start, end)` test:
//!   at a window's start nothing has elapsed, and at its end instant the
//!   window no longer matches.
//!
//! Both are zero on holidays and closed days. [`Calendar::is_working_time`]
//! uses the inclusive `[start, end]` test instead. [`Calendar::subtract_time`]
//! consumes windows backwards with `(start, end]` so that it can start from a
//! window's end instant.
//!
//! # Arithmetic
//!
//! [`Calendar::add_time`] spends a budget of seconds window by window. When
//! the budget outlives the current window it moves to the next window the
//! walker reaches (see [`GapPolicy`](crate::GapPolicy)).
//! [`Calendar::subtract_time`] mirrors this backwards, and [`Calendar::diff`]
//! walks the same path forward, so `diff(t, add_time(t, s)?)? == s` for any
//! `s > 0`.

use chrono::{Duration, NaiveDateTime};
use tracing::trace;

use crate::calendar::Calendar;
use crate::error::CalendarError;

impl Calendar {
    /// Seconds from `instant` to the end of the window containing it, or 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_hours::{Calendar, CalendarConfig, WindowSpec};
    /// use chrono::NaiveDate;
    ///
    /// let config = CalendarConfig::new().with_windows(1, vec![WindowSpec::new("09:00", "12:00")]);
    /// let calendar = Calendar::with_offset_minutes(&config, 0).unwrap();
    /// let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    /// assert_eq!(calendar.remaining_working_time(monday.and_hms_opt(10, 30, 0).unwrap()), 5400);
    /// assert_eq!(calendar.remaining_working_time(monday.and_hms_opt(12, 0, 0).unwrap()), 0);
    /// ```
    pub fn remaining_working_time(&self, instant: NaiveDateTime) -> u64 {
        whole_seconds(self.remaining_in_window(instant))
    }

    /// Seconds from the start of the window containing `instant` to `instant`,
    /// or 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_hours::{Calendar, CalendarConfig, WindowSpec};
    /// use chrono::NaiveDate;
    ///
    /// let config = CalendarConfig::new().with_windows(1, vec![WindowSpec::new("09:00", "12:00")]);
    /// let calendar = Calendar::with_offset_minutes(&config, 0).unwrap();
    /// let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    /// assert_eq!(calendar.elapsed_working_time(monday.and_hms_opt(10, 30, 0).unwrap()), 5400);
    /// assert_eq!(calendar.elapsed_working_time(monday.and_hms_opt(12, 0, 0).unwrap()), 0);
    /// ```
    pub fn elapsed_working_time(&self, instant: NaiveDateTime) -> u64 {
        let elapsed = self
            .windows_on(instant.date())
            .into_iter()
            .find(|(start, end)| *start <= instant && instant < *end)
            .map(|(start, _)| instant - start)
            .unwrap_or_else(Duration::zero);
        whole_seconds(elapsed)
    }

    /// Move `instant` forward by `seconds` of working time.
    ///
    /// Adding 0 returns `instant` unchanged, even outside working hours. A
    /// budget that exactly fills a window lands on that window's end.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::NegativeDuration`] if `seconds < 0`
    /// - [`CalendarError::NoWorkingDayFound`] if the walk runs out of working days
    /// - [`CalendarError::OutOfRange`] on datetime overflow
    pub fn add_time(
        &self,
        instant: NaiveDateTime,
        seconds: i64,
    ) -> Result<NaiveDateTime, CalendarError> {
        let mut budget = budget_from(seconds)?;
        let mut current = instant;

        while budget > Duration::zero() {
            let remaining = self.remaining_in_window(current);
            if budget <= remaining {
                return shift(current, budget);
            }
            budget = budget - remaining;
            let window_end = shift(current, remaining)?;
            current = self.next_window_start(window_end)?;
            trace!(
                at = %current,
                budget_seconds = budget.num_seconds(),
                "carried budget into next window"
            );
        }

        Ok(current)
    }

    /// Move `instant` backward by `seconds` of working time.
    ///
    /// # Errors
    ///
    /// Same as [`Calendar::add_time`].
    pub fn subtract_time(
        &self,
        instant: NaiveDateTime,
        seconds: i64,
    ) -> Result<NaiveDateTime, CalendarError> {
        let mut budget = budget_from(seconds)?;
        let mut current = instant;

        while budget > Duration::zero() {
            let elapsed = self.elapsed_in_window(current);
            if budget <= elapsed {
                return shift(current, -budget);
            }
            budget = budget - elapsed;
            let window_start = shift(current, -elapsed)?;
            current = self.previous_window_end(window_start)?;
            trace!(
                at = %current,
                budget_seconds = budget.num_seconds(),
                "carried budget into previous window"
            );
        }

        Ok(current)
    }

    /// Working seconds between `start` and `end`.
    ///
    /// Walks forward from `start` exactly as [`Calendar::add_time`] would,
    /// counting each window up to `end`. Nothing after `end` is counted. If
    /// `start > end` the result is `-diff(end, start)`.
    ///
    /// Only windows the walker visits are counted, so under
    /// [`GapPolicy::NextDay`](crate::GapPolicy::NextDay) the result is not the
    /// total working time in `[start, end]`. Once the walk leaves a window, or
    /// when `start` falls before the day's first window, the rest of that day
    /// is skipped. On a Monday with windows 09:00-12:00 and 13:00-18:00:
    ///
    /// - `diff(Mon 07:00, Mon 11:00)` is 0, not 7200
    /// - `diff(Mon 10:00, Mon 14:00)` is 7200, not 10800
    ///
    /// [`GapPolicy::NextWindow`](crate::GapPolicy::NextWindow) visits every
    /// window and gives 7200 and 10800.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::NoWorkingDayFound`] if the walk runs out of working days
    /// - [`CalendarError::OutOfRange`] on datetime overflow
    pub fn diff(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<i64, CalendarError> {
        if start > end {
            return self.diff(end, start).map(|seconds| -seconds);
        }

        let mut total = Duration::zero();
        let mut current = start;

        while current < end {
            let remaining = self.remaining_in_window(current);
            if remaining > Duration::zero() {
                let window_end = shift(current, remaining)?;
                if window_end >= end {
                    total = total + (end - current);
                    break;
                }
                total = total + remaining;
                current = window_end;
            }
            current = self.next_window_start(current)?;
        }

        Ok(total.num_seconds())
    }

    fn remaining_in_window(&self, instant: NaiveDateTime) -> Duration {
        self.windows_on(instant.date())
            .into_iter()
            .find(|(start, end)| *start <= instant && instant < *end)
            .map(|(_, end)| end - instant)
            .unwrap_or_else(Duration::zero)
    }

    fn elapsed_in_window(&self, instant: NaiveDateTime) -> Duration {
        self.windows_on(instant.date())
            .into_iter()
            .find(|(start, end)| *start < instant && instant <= *end)
            .map(|(start, _)| instant - start)
            .unwrap_or_else(Duration::zero)
    }
}

fn budget_from(seconds: i64) -> Result<Duration, CalendarError> {
    if seconds < 0 {
        return Err(CalendarError::NegativeDuration(seconds));
    }
    Duration::try_seconds(seconds)
        .ok_or_else(|| CalendarError::OutOfRange(format!("{} seconds", seconds)))
}

fn shift(instant: NaiveDateTime, by: Duration) -> Result<NaiveDateTime, CalendarError> {
    instant
        .checked_add_signed(by)
        .ok_or_else(|| CalendarError::OutOfRange(format!("'{}' shifted by {}", instant, by)))
}

fn whole_seconds(d: Duration) -> u64 {
    u64::try_from(d.num_seconds()).unwrap_or(0)
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Walking forward and backward to the nearest working instant.
//!
//! Day walks are bounded by [`MAX_WALK_DAYS`]: a calendar whose working days
//! are all covered by holidays yields [`CalendarError::NoWorkingDayFound`]
//! instead of looping forever.
//!
//! Under the default [`GapPolicy::NextDay`], leaving a non-working instant
//! always moves to another *day*. An instant before the first window, or in a
//! lunch break, lands on the next working day's first window even though a
//! window later the same day exists. [`GapPolicy::NextWindow`] checks the
//! rest of the current day first.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::calendar::Calendar;
use crate::config::GapPolicy;
use crate::error::CalendarError;

/// Upper bound on the number of calendar days a single walk may step.
pub const MAX_WALK_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self) -> Duration {
        match self {
            Direction::Forward => Duration::days(1),
            Direction::Backward => Duration::days(-1),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Direction::Forward => "after",
            Direction::Backward => "before",
        }
    }
}

impl Calendar {
    /// The first working day strictly after `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoWorkingDayFound`] if none exists within
    /// [`MAX_WALK_DAYS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use business_hours::{Calendar, CalendarConfig, WindowSpec};
    /// use chrono::NaiveDate;
    ///
    /// let config = CalendarConfig::new().with_windows(1, vec![WindowSpec::new("09:00", "17:00")]);
    /// let calendar = Calendar::with_offset_minutes(&config, 0).unwrap();
    /// let friday = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    /// let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    /// assert_eq!(calendar.next_working_day(friday).unwrap(), monday);
    /// ```
    pub fn next_working_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.walk_days(date, Direction::Forward)
    }

    /// The last working day strictly before `date`.
    pub fn previous_working_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.walk_days(date, Direction::Backward)
    }

    /// `instant` itself if it is working time, otherwise the start of the
    /// next reachable window (see [`GapPolicy`]).
    pub fn next_working_time(&self, instant: NaiveDateTime) -> Result<NaiveDateTime, CalendarError> {
        if self.is_working_time(instant) {
            return Ok(instant);
        }
        self.next_window_start(instant)
    }

    /// `instant` itself if it is working time, otherwise the end of the
    /// previous reachable window (see [`GapPolicy`]).
    pub fn previous_working_time(
        &self,
        instant: NaiveDateTime,
    ) -> Result<NaiveDateTime, CalendarError> {
        if self.is_working_time(instant) {
            return Ok(instant);
        }
        self.previous_window_end(instant)
    }

    /// Start of the next window after `instant`, treating `instant` as
    /// non-working even when it sits on a window end.
    pub(crate) fn next_window_start(
        &self,
        instant: NaiveDateTime,
    ) -> Result<NaiveDateTime, CalendarError> {
        if self.gap_policy() == GapPolicy::NextWindow {
            let same_day = self
                .windows_on(instant.date())
                .into_iter()
                .map(|(start, _)| start)
                .find(|start| *start > instant);
            if let Some(start) = same_day {
                trace!(from = %instant, to = %start, "jump to later window on same day");
                return Ok(start);
            }
        }

        let day = self.next_working_day(instant.date())?;
        let start = self
            .configured_windows(day)
            .first()
            .map(|w| day.and_time(w.start))
            .ok_or_else(|| CalendarError::NoWorkingDayFound(format!("{} has no windows", day)))?;
        trace!(from = %instant, to = %start, "jump to first window of next working day");
        Ok(start)
    }

    /// End of the previous window before `instant`, treating `instant` as
    /// non-working even when it sits on a window start.
    pub(crate) fn previous_window_end(
        &self,
        instant: NaiveDateTime,
    ) -> Result<NaiveDateTime, CalendarError> {
        if self.gap_policy() == GapPolicy::NextWindow {
            let same_day = self
                .windows_on(instant.date())
                .into_iter()
                .rev()
                .map(|(_, end)| end)
                .find(|end| *end < instant);
            if let Some(end) = same_day {
                trace!(from = %instant, to = %end, "jump to earlier window on same day");
                return Ok(end);
            }
        }

        let day = self.previous_working_day(instant.date())?;
        let end = self
            .configured_windows(day)
            .last()
            .map(|w| day.and_time(w.end))
            .ok_or_else(|| CalendarError::NoWorkingDayFound(format!("{} has no windows", day)))?;
        trace!(from = %instant, to = %end, "jump to last window of previous working day");
        Ok(end)
    }

    fn walk_days(&self, from: NaiveDate, direction: Direction) -> Result<NaiveDate, CalendarError> {
        let mut day = from;
        for _ in 0..MAX_WALK_DAYS {
            day = day.checked_add_signed(direction.step()).ok_or_else(|| {
                CalendarError::OutOfRange(format!("walking {} {}", direction.label(), from))
            })?;
            if self.is_working_day(day) {
                return Ok(day);
            }
        }
        Err(CalendarError::NoWorkingDayFound(format!(
            "none within {} days {} {}",
            MAX_WALK_DAYS,
            direction.label(),
            from
        )))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

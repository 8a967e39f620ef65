//! Working windows and boundary resolution.
//!
//! A [`WorkingWindow`] is a pair of wall-clock times (`"HH:mm"`, 24-hour,
//! zero-padded). [`WorkingWindow::resolve`] anchors the pair to a calendar
//! date, producing the absolute start and end instants of the window on that
//! day. No timezone adjustment happens here: instants handed to the resolver
//! are already in the calendar's fixed offset.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CalendarError;

/// A start/end time-of-day pair within which a day counts as working time.
///
/// Seconds are always zero. `end > start` is checked when a calendar is built,
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkingWindow {
    /// Build a window from two `"HH:mm"` strings.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindowFormat`] if either string is not a
    /// zero-padded 24-hour `"HH:mm"` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_hours::window::WorkingWindow;
    ///
    /// let w = WorkingWindow::parse("09:00", "17:30").unwrap();
    /// assert_eq!(w.duration_seconds(), 30_600);
    /// assert!(WorkingWindow::parse("9:00", "17:30").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<Self, CalendarError> {
        Ok(Self {
            start: parse_time_of_day(start)?,
            end: parse_time_of_day(end)?,
        })
    }

    /// Length of the window in seconds (negative for an inverted window).
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Anchor the window to `date`, returning `(start, end)` instants.
    pub fn resolve(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (date.and_time(self.start), date.and_time(self.end))
    }
}

/// Parse a strict `"HH:mm"` string: two digits, a colon, two digits.
///
/// Hours must be in 0–23 and minutes in 0–59.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, CalendarError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit);
    if !well_formed {
        return Err(CalendarError::InvalidWindowFormat(format!(
            "'{}': expected HH:mm",
            s
        )));
    }

    // Digits checked above.
    let hour: u32 = s[..2].parse().unwrap_or(u32::MAX);
    let minute: u32 = s[3..].parse().unwrap_or(u32::MAX);

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        CalendarError::InvalidWindowFormat(format!(
            "'{}': hour must be 00-23 and minute 00-59",
            s
        ))
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────

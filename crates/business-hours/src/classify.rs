//! Day and time classification.
//!
//! - [`Calendar::is_holiday`] — date-only match against the holiday set
//! - [`Calendar::is_working_day`] — not a holiday and at least one window
//! - [`Calendar::is_working_time`] — inside a window, both ends inclusive

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::calendar::Calendar;
use crate::window::WorkingWindow;

impl Calendar {
    /// Whether `date` is a configured holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays().contains(&date)
    }

    /// Whether `date` is a working day: not a holiday, and its weekday has at
    /// least one window.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_holiday(date) && !self.configured_windows(date).is_empty()
    }

    /// Whether `instant` falls inside one of its day's windows.
    ///
    /// Both window ends count as working time, so `12:00` is working time in a
    /// `09:00–12:00` window.
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
    /// assert!(calendar.is_working_time(monday.and_hms_opt(12, 0, 0).unwrap()));
    /// assert!(!calendar.is_working_time(monday.and_hms_opt(12, 0, 1).unwrap()));
    /// ```
    pub fn is_working_time(&self, instant: NaiveDateTime) -> bool {
        if !self.is_working_day(instant.date()) {
            return false;
        }
        self.configured_windows(instant.date())
            .iter()
            .map(|w| w.resolve(instant.date()))
            .any(|(start, end)| start <= instant && instant <= end)
    }

    /// Resolved `(start, end)` instants of the windows on `date`, in
    /// configured order. Empty on holidays and closed days.
    pub fn windows_on(&self, date: NaiveDate) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        if !self.is_working_day(date) {
            return Vec::new();
        }
        self.configured_windows(date)
            .iter()
            .map(|w| w.resolve(date))
            .collect()
    }

    /// The weekday's windows, regardless of holidays.
    pub(crate) fn configured_windows(&self, date: NaiveDate) -> &[WorkingWindow] {
        self.weekday_windows(date.weekday().num_days_from_sunday() as usize)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::calendar::{at, day, sample_calendar};

    #[test]
    fn test_holiday_matches_date() {
        let calendar = sample_calendar();
        assert!(calendar.is_holiday(day("2024-03-08")));
        assert!(calendar.is_holiday(day("2024-03-10")));
        assert!(!calendar.is_holiday(day("2024-03-11")));
    }

    #[test]
    fn test_holiday_ignores_time_of_day() {
        let calendar = sample_calendar();
        assert!(calendar.is_holiday(at("2024-03-08T23:59:59").date()));
        assert!(calendar.is_holiday(at("2024-03-08T00:00:00").date()));
    }

    #[test]
    fn test_working_day() {
        let calendar = sample_calendar();
        assert!(calendar.is_working_day(day("2024-03-11"))); // Monday
        assert!(calendar.is_working_day(day("2024-03-13"))); // Wednesday
        assert!(!calendar.is_working_day(day("2024-03-16"))); // Saturday
        assert!(!calendar.is_working_day(day("2024-03-17"))); // Sunday
    }

    #[test]
    fn test_holiday_is_not_working_day() {
        // 2024-03-08 is a Friday with 09:00-18:00 configured
        let calendar = sample_calendar();
        assert!(!calendar.is_working_day(day("2024-03-08")));
        assert!(calendar.is_working_day(day("2024-03-15")));
    }

    #[test]
    fn test_working_time_inside_window() {
        let calendar = sample_calendar();
        assert!(calendar.is_working_time(at("2024-03-11T10:00:00")));
        assert!(calendar.is_working_time(at("2024-03-11T15:30:00")));
    }

    #[test]
    fn test_working_time_outside_window() {
        let calendar = sample_calendar();
        assert!(!calendar.is_working_time(at("2024-03-11T20:00:00")));
        assert!(!calendar.is_working_time(at("2024-03-11T08:59:59")));
        // Lunch break
        assert!(!calendar.is_working_time(at("2024-03-11T12:30:00")));
        // Wednesday afternoon has no window
        assert!(!calendar.is_working_time(at("2024-03-13T14:00:00")));
    }

    #[test]
    fn test_working_time_inclusive_ends() {
        let calendar = sample_calendar();
        assert!(calendar.is_working_time(at("2024-03-11T09:00:00")));
        assert!(calendar.is_working_time(at("2024-03-11T12:00:00")));
        assert!(calendar.is_working_time(at("2024-03-11T13:00:00")));
        assert!(calendar.is_working_time(at("2024-03-11T18:00:00")));
        assert!(!calendar.is_working_time(at("2024-03-11T18:00:01")));
    }

    #[test]
    fn test_working_time_false_on_holiday() {
        let calendar = sample_calendar();
        assert!(!calendar.is_working_time(at("2024-03-08T10:00:00")));
    }

    #[test]
    fn test_windows_on() {
        let calendar = sample_calendar();
        let windows = calendar.windows_on(day("2024-03-12"));
        assert_eq!(
            windows,
            vec![
                (at("2024-03-12T09:00:00"), at("2024-03-12T12:00:00")),
                (at("2024-03-12T13:00:00"), at("2024-03-12T18:00:00")),
            ]
        );
        assert!(calendar.windows_on(day("2024-03-08")).is_empty());
        assert!(calendar.windows_on(day("2024-03-16")).is_empty());
    }
}

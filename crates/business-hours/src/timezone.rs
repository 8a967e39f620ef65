//! One-shot timezone resolution.
//!
//! A calendar captures a single fixed UTC offset when it is built. DST
//! transitions inside a queried range are not recomputed; instants passed to
//! the engine are taken to already be in that offset.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::CalendarError;

/// Resolve an IANA timezone name to its offset from UTC, in minutes, at `at`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimezone`] if `name` is not a known IANA
/// timezone.
///
/// # Examples
///
/// ```
/// use business_hours::timezone::resolve_offset_minutes;
/// use chrono::{TimeZone, Utc};
///
/// let summer = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
/// assert_eq!(resolve_offset_minutes("America/New_York", summer).unwrap(), -240);
/// assert_eq!(resolve_offset_minutes("Asia/Tokyo", summer).unwrap(), 540);
/// ```
pub fn resolve_offset_minutes(name: &str, at: DateTime<Utc>) -> Result<i32, CalendarError> {
    let tz = parse_timezone(name)?;
    let seconds = tz
        .offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc();
    Ok(seconds / 60)
}

/// Build a [`FixedOffset`] from a minute offset east of UTC.
pub fn fixed_offset(minutes: i32) -> Result<FixedOffset, CalendarError> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt).ok_or_else(|| {
        CalendarError::InvalidTimezone(format!("offset of {} minutes is out of range", minutes))
    })
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz, CalendarError> {
    s.parse::<Tz>()
        .map_err(|_| CalendarError::InvalidTimezone(format!("'{}'", s)))
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Interval algebra over absolute instants.
//!
//! Every interval is half-open, `[start, end)`, and stored in UTC. Calendar
//! days are resolved in an IANA timezone so that 23-hour and 25-hour days
//! around DST transitions come out of the timezone rules rather than fixed
//! 24-hour arithmetic.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{CoverageError, Result};

/// A half-open interval `[start, end)` between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Signed length; negative when `end` precedes `start`.
    pub fn length(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `other` lies entirely inside `self`. Shared bounds count as inside.
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two intervals share at least one instant. Touching
    /// intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parse an RFC 3339 datetime string into `DateTime<Utc>`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoverageError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| CoverageError::InvalidTimezone(format!("'{}'", s)))
}

// ── Day boundaries ──────────────────────────────────────────────────────────

/// The first instant of the local calendar day `date` in `tz`.
///
/// When midnight is repeated the earlier instant wins. When midnight is
/// skipped by a DST jump the day starts at the first local time that exists,
/// probed in 15-minute steps.
pub fn start_of_local_day(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>> {
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        CoverageError::InvalidDatetime(format!("no midnight for {date}"))
    })?;

    let resolved = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => (1..=8)
            .map(|step| midnight + Duration::minutes(15 * step))
            .find_map(|naive| tz.from_local_datetime(&naive).earliest()),
    };

    resolved
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            CoverageError::InvalidDatetime(format!("no start of day for {date} in {}", tz.name()))
        })
}

/// The start of the local day containing `instant`.
pub fn day_floor(instant: DateTime<Utc>, tz: &Tz) -> Result<DateTime<Utc>> {
    start_of_local_day(instant.with_timezone(tz).date_naive(), tz)
}

/// The end of the local day containing `instant`, i.e. the start of the next
/// local day. An instant that already sits on a day boundary is returned
/// unchanged.
pub fn day_ceil(instant: DateTime<Utc>, tz: &Tz) -> Result<DateTime<Utc>> {
    let date = instant.with_timezone(tz).date_naive();
    let floor = start_of_local_day(date, tz)?;
    if floor == instant {
        return Ok(instant);
    }
    let next = date.succ_opt().ok_or_else(|| {
        CoverageError::InvalidDatetime(format!("no calendar day after {date}"))
    })?;
    start_of_local_day(next, tz)
}

// ── Formatting ──────────────────────────────────────────────────────────────

/// Wall-clock `HH:MM` of `instant` in `tz`.
pub(crate) fn format_clock(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%H:%M").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────

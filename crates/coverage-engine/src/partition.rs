//! Split the display window into whole calendar days.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{CoverageError, Result};
use crate::interval::{day_ceil, start_of_local_day, Interval};
use crate::model::Window;

/// One calendar day in the window's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub interval: Interval,
}

/// The minimal run of whole local days covering
/// `[day_floor(window.start), day_ceil(window.end))`.
///
/// Days are contiguous and strictly increasing: each day ends exactly where
/// the next begins. Their lengths follow the timezone, so DST days are 23 or
/// 25 hours long.
pub fn partition_days(window: &Window) -> Result<Vec<Day>> {
    window.validate()?;
    let tz = &window.timezone;

    let first = window.start.with_timezone(tz).date_naive();
    let last_exclusive = day_ceil(window.end, tz)?.with_timezone(tz).date_naive();

    let mut days = Vec::new();
    let mut date = first;
    let mut start = start_of_local_day(date, tz)?;
    while date < last_exclusive {
        let next = date.succ_opt().ok_or_else(|| {
            CoverageError::InvalidDatetime(format!("no calendar day after {date}"))
        })?;
        let end = start_of_local_day(next, tz)?;
        days.push(Day {
            date,
            interval: Interval::new(start, end),
        });
        date = next;
        start = end;
    }
    Ok(days)
}

//! Per-day coverage: gap notices and shift entries for one day bucket.
//!
//! On the first and last day the window bound replaces the day bound, so
//! gaps never reach outside the displayed range.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::interval::{format_clock, Interval};
use crate::model::{CoverageOptions, Window};
use crate::partition::Day;
use crate::sequence::{ActionLedger, OutputItem};
use crate::validator::DerivedShift;

/// Where an uncovered stretch sits relative to the shifts of its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    /// Between the effective day start and the first shift.
    PreFirst,
    /// Between two consecutive shifts.
    Between,
    /// Between the last shift and the effective day end.
    PostLast,
    /// The day has no shifts at all.
    WholeDay,
}

/// How a shift relates to the (effective) interval of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCoverage {
    /// Starts at or before the day and ends at or after it.
    WholeDay,
    /// Starts and ends inside the day.
    WithinDay,
    /// Started before the day and ends inside it.
    EndsInDay,
    /// Starts inside the day and continues past its end.
    ContinuesPastDay,
}

impl DayCoverage {
    pub fn classify(shift: &Interval, day: &Interval) -> Self {
        match (shift.start.cmp(&day.start), shift.end.cmp(&day.end)) {
            (Ordering::Less | Ordering::Equal, Ordering::Greater | Ordering::Equal) => {
                Self::WholeDay
            }
            (Ordering::Less, Ordering::Less) => Self::EndsInDay,
            (Ordering::Greater, Ordering::Greater) => Self::ContinuesPastDay,
            (Ordering::Equal, Ordering::Less) | (Ordering::Greater, _) => Self::WithinDay,
        }
    }

    /// Human-readable coverage text, with times in `tz`.
    pub fn describe(&self, shift: &Interval, tz: &Tz) -> String {
        match self {
            Self::WholeDay => "All day".to_string(),
            Self::WithinDay => format!(
                "{} to {}",
                format_clock(shift.start, tz),
                format_clock(shift.end, tz)
            ),
            Self::EndsInDay => format!("Until {}", format_clock(shift.end, tz)),
            Self::ContinuesPastDay => format!("From {}", format_clock(shift.start, tz)),
        }
    }
}

/// A day bucket together with its position in the partition.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    pub day: &'a Day,
    pub is_first: bool,
    pub is_last: bool,
    pub window: &'a Window,
}

impl DayContext<'_> {
    /// The day interval with the window bounds substituted on the first and
    /// last day.
    pub fn effective_interval(&self) -> Interval {
        let start = if self.is_first {
            self.window.start
        } else {
            self.day.interval.start
        };
        let end = if self.is_last {
            self.window.end
        } else {
            self.day.interval.end
        };
        Interval::new(start, end)
    }
}

/// Derive the ordered items for one day.
///
/// `day_shifts` must be the derived shifts overlapping the day, sorted by
/// start. `schedule_is_empty` is true when the whole computation has no
/// shifts; only the first day then reports, with a single no-coverage item.
/// Each shift entry claims the shift's removal action from `ledger`, so only
/// its first occurrence across all days is removable.
pub fn analyze_day(
    ctx: &DayContext<'_>,
    day_shifts: &[&DerivedShift],
    schedule_is_empty: bool,
    options: &CoverageOptions,
    ledger: &mut ActionLedger,
) -> Vec<OutputItem> {
    let mut items = Vec::new();

    if schedule_is_empty {
        if ctx.is_first {
            items.push(OutputItem::NoCoverage {
                from: ctx.window.start,
                to: ctx.window.end,
            });
        }
        return items;
    }

    let bounds = ctx.effective_interval();

    let (Some(first), Some(last)) = (day_shifts.first(), day_shifts.last()) else {
        items.push(OutputItem::GapAlert {
            kind: GapKind::WholeDay,
            from: bounds.start,
            to: bounds.end,
        });
        return items;
    };

    push_gap(
        &mut items,
        GapKind::PreFirst,
        &bounds,
        bounds.start,
        first.interval.start,
        options,
    );

    for (idx, derived) in day_shifts.iter().enumerate() {
        // A shift inside the day bucket but wholly outside the window has no
        // relation to the clamped bounds; describe it against the whole day.
        let reference = if derived.interval.overlaps(&bounds) {
            bounds
        } else {
            ctx.day.interval
        };
        let coverage = DayCoverage::classify(&derived.interval, &reference);
        items.push(OutputItem::ShiftEntry {
            shift: (*derived).clone(),
            coverage,
            day_label: coverage.describe(&derived.interval, &ctx.window.timezone),
            removable: ledger.claim(&derived.shift.id),
        });

        if let Some(next) = day_shifts.get(idx + 1) {
            push_gap(
                &mut items,
                GapKind::Between,
                &bounds,
                derived.interval.end,
                next.interval.start,
                options,
            );
        }
    }

    push_gap(
        &mut items,
        GapKind::PostLast,
        &bounds,
        last.interval.end,
        bounds.end,
        options,
    );

    items
}

/// Whether the stretch `[from, to)` is long enough to report. Empty or
/// reversed stretches never are, whatever the threshold.
pub fn exceeds_threshold(from: DateTime<Utc>, to: DateTime<Utc>, options: &CoverageOptions) -> bool {
    let length = Interval::new(from, to).length();
    length > Duration::zero() && length > options.gap_threshold
}

/// Report `[from, to)` clamped to `bounds` if it is still long enough.
fn push_gap(
    items: &mut Vec<OutputItem>,
    kind: GapKind,
    bounds: &Interval,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    options: &CoverageOptions,
) {
    let from = from.max(bounds.start);
    let to = to.min(bounds.end);
    if exceeds_threshold(from, to, options) {
        items.push(OutputItem::GapAlert { kind, from, to });
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

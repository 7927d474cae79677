//! Assemble the flat, ordered sequence of presentation items for a window.
//!
//! Data flows: shifts are annotated against the window, the window is cut
//! into days, each day is analyzed in order, and the results are framed by
//! day headers and the start/end boundary alerts.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use crate::coverage::{analyze_day, DayContext, DayCoverage, GapKind};
use crate::error::Result;
use crate::model::{CoverageOptions, Shift, ShiftId, Window};
use crate::partition::partition_days;
use crate::validator::{derive_shifts, DerivedShift};

/// Which edge of the window a boundary alert marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    Start,
    End,
}

/// One entry of the output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    DayHeader {
        date: NaiveDate,
    },
    /// The literal start or end instant of the window.
    BoundaryAlert {
        kind: BoundaryKind,
        time: DateTime<Utc>,
    },
    GapAlert {
        kind: GapKind,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
    /// The schedule has no shifts at all; attached to the first day.
    NoCoverage {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
    ShiftEntry {
        shift: DerivedShift,
        coverage: DayCoverage,
        day_label: String,
        /// Only the first occurrence of a shift carries the removal action.
        removable: bool,
    },
}

/// Shift ids whose removal action has already been emitted in this computation.
#[derive(Debug, Default)]
pub struct ActionLedger {
    emitted: HashSet<ShiftId>,
}

impl ActionLedger {
    /// Record an occurrence of `id`. Returns `true` only the first time.
    pub fn claim(&mut self, id: &ShiftId) -> bool {
        self.emitted.insert(id.clone())
    }
}

/// Build the item sequence with the default options.
///
/// # Errors
///
/// Returns [`CoverageError::InvalidWindow`](crate::CoverageError::InvalidWindow)
/// if `window.start >= window.end`, or
/// [`CoverageError::InvalidShift`](crate::CoverageError::InvalidShift) if any
/// shift does not end after it starts.
pub fn build_items(window: &Window, shifts: &[Shift]) -> Result<Vec<OutputItem>> {
    build_items_with_options(window, shifts, &CoverageOptions::default())
}

/// Build the item sequence for `window` and `shifts`.
///
/// The computation is pure: identical inputs always yield an identical
/// sequence. Shift order in the input does not matter.
pub fn build_items_with_options(
    window: &Window,
    shifts: &[Shift],
    options: &CoverageOptions,
) -> Result<Vec<OutputItem>> {
    window.validate()?;
    for shift in shifts {
        shift.validate()?;
    }

    let derived = derive_shifts(shifts, window);
    let days = partition_days(window)?;
    let schedule_is_empty = derived.is_empty();

    debug!(
        start = %window.start,
        end = %window.end,
        timezone = window.timezone.name(),
        days = days.len(),
        shifts = derived.len(),
        invalid = derived.iter().filter(|d| !d.valid).count(),
        "building coverage items"
    );

    let mut ledger = ActionLedger::default();
    let mut items = Vec::new();
    let last_idx = days.len().saturating_sub(1);

    for (idx, day) in days.iter().enumerate() {
        let is_first = idx == 0;
        let is_last = idx == last_idx;
        if schedule_is_empty && !is_first && !is_last {
            continue;
        }

        let day_shifts: Vec<&DerivedShift> = derived
            .iter()
            .filter(|d| d.interval.overlaps(&day.interval))
            .collect();
        trace!(date = %day.date, shifts = day_shifts.len(), "analyzing day");

        items.push(OutputItem::DayHeader { date: day.date });
        if is_first {
            items.push(OutputItem::BoundaryAlert {
                kind: BoundaryKind::Start,
                time: window.start,
            });
        }

        let ctx = DayContext {
            day,
            is_first,
            is_last,
            window,
        };
        items.extend(analyze_day(
            &ctx,
            &day_shifts,
            schedule_is_empty,
            options,
            &mut ledger,
        ));

        if is_last {
            items.push(OutputItem::BoundaryAlert {
                kind: BoundaryKind::End,
                time: window.end,
            });
        }
    }

    debug!(items = items.len(), "coverage items built");
    Ok(items)
}

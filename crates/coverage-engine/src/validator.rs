//! Tag each shift as valid or invalid against the display window.
//!
//! Validity is structural only: a shift is valid when the window fully
//! contains it. Overlaps between shifts are not inspected.

use serde::Serialize;

use crate::interval::Interval;
use crate::model::{Shift, Window};

/// A shift annotated with its interval and window validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedShift {
    pub shift: Shift,
    pub interval: Interval,
    /// `true` when the window fully contains the shift.
    pub valid: bool,
}

/// Whether `shift` lies entirely inside `window`. Partial overlap is not enough.
pub fn is_within_window(shift: &Shift, window: &Window) -> bool {
    window.interval().contains(&shift.interval())
}

/// Annotate every shift and sort by start, then end, then id.
///
/// Invalid shifts are kept so they can still be shown with a warning.
pub fn derive_shifts(shifts: &[Shift], window: &Window) -> Vec<DerivedShift> {
    let mut derived: Vec<DerivedShift> = shifts
        .iter()
        .map(|shift| DerivedShift {
            shift: shift.clone(),
            interval: shift.interval(),
            valid: is_within_window(shift, window),
        })
        .collect();

    derived.sort_by(|a, b| {
        a.interval
            .start
            .cmp(&b.interval.start)
            .then(a.interval.end.cmp(&b.interval.end))
            .then_with(|| a.shift.id.cmp(&b.shift.id))
    });
    derived
}

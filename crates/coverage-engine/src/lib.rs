//! # coverage-engine
//!
//! Deterministic day-by-day coverage of a shift schedule.
//!
//! Given a fixed display window and a set of scheduled shifts, the engine
//! produces an ordered sequence of presentation items: day headers, window
//! boundary alerts, coverage-gap notices, and one entry per shift per day,
//! annotated with validity. Every shift carries its removal action exactly
//! once, however many days it spans.
//!
//! ## Modules
//!
//! - [`interval`]: Half-open intervals and timezone-aware day floor/ceiling
//! - [`model`]: Window, shift, and option types
//! - [`validator`]: Tag shifts as contained in the window or not
//! - [`partition`]: Split the window into whole local days
//! - [`coverage`]: Per-day gaps and shift entries
//! - [`sequence`]: Assemble the final item sequence
//! - [`display`]: Label/subtext/severity rows for a list renderer
//! - [`error`]: Error types

pub mod coverage;
pub mod display;
pub mod error;
pub mod interval;
pub mod model;
pub mod partition;
pub mod sequence;
pub mod validator;

pub use coverage::{analyze_day, DayContext, DayCoverage, GapKind};
pub use display::{present_item, present_items, DisplayRow, Severity};
pub use error::{CoverageError, Result};
pub use interval::Interval;
pub use model::{
    AssigneeRef, CoverageOptions, Shift, ShiftId, Window, DEFAULT_GAP_THRESHOLD_SECS,
};
pub use partition::{partition_days, Day};
pub use sequence::{
    build_items, build_items_with_options, ActionLedger, BoundaryKind, OutputItem,
};
pub use validator::{derive_shifts, is_within_window, DerivedShift};

//! Presentation adapter over [`OutputItem`].
//!
//! Turns each item into a row a generic list renderer can show without
//! re-deriving any coverage logic. The computation in [`crate::sequence`]
//! never depends on this module.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::coverage::GapKind;
use crate::interval::format_clock;
use crate::model::ShiftId;
use crate::sequence::{BoundaryKind, OutputItem};

/// Severity tag a renderer can map to an icon or color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// A display-ready row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: String,
    pub subtext: Option<String>,
    pub severity: Option<Severity>,
    /// Handle the caller binds to its own removal pathway. Present only on
    /// the removable occurrence of a shift.
    pub remove_handle: Option<ShiftId>,
}

impl DisplayRow {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subtext: None,
            severity: None,
            remove_handle: None,
        }
    }

    fn subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }
}

/// Render every item, formatting instants in `tz`.
pub fn present_items(items: &[OutputItem], tz: &Tz) -> Vec<DisplayRow> {
    items.iter().map(|item| present_item(item, tz)).collect()
}

/// Render a single item, formatting instants in `tz`.
pub fn present_item(item: &OutputItem, tz: &Tz) -> DisplayRow {
    match item {
        OutputItem::DayHeader { date } => DisplayRow::new(date.format("%A, %B %-d, %Y").to_string()),
        OutputItem::BoundaryAlert { kind, time } => {
            let label = match kind {
                BoundaryKind::Start => "Window starts",
                BoundaryKind::End => "Window ends",
            };
            DisplayRow::new(label)
                .subtext(format_moment(*time, tz))
                .severity(Severity::Info)
        }
        OutputItem::GapAlert { kind, from, to } => {
            let label = match kind {
                GapKind::PreFirst => "No coverage before the first shift",
                GapKind::Between => "No coverage between shifts",
                GapKind::PostLast => "No coverage after the last shift",
                GapKind::WholeDay => "No coverage for this day",
            };
            DisplayRow::new(label)
                .subtext(format!(
                    "{} to {} ({})",
                    format_clock(*from, tz),
                    format_clock(*to, tz),
                    format_human_duration((*to - *from).num_seconds())
                ))
                .severity(Severity::Warning)
        }
        OutputItem::NoCoverage { .. } => DisplayRow::new("No coverage in this window")
            .subtext("Add a shift to get started")
            .severity(Severity::Warning),
        OutputItem::ShiftEntry {
            shift,
            day_label,
            removable,
            ..
        } => {
            let mut row = DisplayRow::new(day_label.clone());
            if shift.valid {
                row = row.subtext(shift.shift.assignee.to_string());
            } else {
                row = row
                    .subtext(format!(
                        "{} (extends outside the displayed window)",
                        shift.shift.assignee
                    ))
                    .severity(Severity::Critical);
            }
            if *removable {
                row.remove_handle = Some(shift.shift.id.clone());
            }
            row
        }
    }
}

fn format_moment(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant
        .with_timezone(tz)
        .format("%A, %B %-d at %H:%M %Z")
        .to_string()
}

/// Format a human-readable duration string from whole seconds.
fn format_human_duration(total_seconds: i64) -> String {
    let abs_seconds = total_seconds.unsigned_abs();
    let days = abs_seconds / 86400;
    let hours = (abs_seconds % 86400) / 3600;
    let minutes = (abs_seconds % 3600) / 60;
    let seconds = abs_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{} day{}", days, if days == 1 { "" } else { "s" }));
    }
    if hours > 0 {
        parts.push(format!(
            "{} hour{}",
            hours,
            if hours == 1 { "" } else { "s" }
        ));
    }
    if minutes > 0 {
        parts.push(format!(
            "{} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!(
            "{} second{}",
            seconds,
            if seconds == 1 { "" } else { "s" }
        ));
    }
    parts.join(", ")
}

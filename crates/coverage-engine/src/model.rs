//! Input types: the display window, the shifts shown in it, and options.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, Result};
use crate::interval::{parse_rfc3339, parse_timezone, Interval};

/// Gap length that must be exceeded before a gap is reported.
pub const DEFAULT_GAP_THRESHOLD_SECS: i64 = 60;

/// Stable identifier of a shift. Also serves as the opaque removal handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(pub String);

impl From<&str> for ShiftId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ShiftId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to whoever covers a shift. Never resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssigneeRef(pub String);

impl From<&str> for AssigneeRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for AssigneeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed time range being displayed, and the timezone its days are cut in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: Tz,
}

impl Window {
    /// Build a window, failing with [`CoverageError::InvalidWindow`] unless `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, timezone: Tz) -> Result<Self> {
        let window = Self {
            start,
            end,
            timezone,
        };
        window.validate()?;
        Ok(window)
    }

    /// Build a window from RFC 3339 instants and an IANA timezone name.
    pub fn parse(start: &str, end: &str, timezone: &str) -> Result<Self> {
        Self::new(
            parse_rfc3339(start)?,
            parse_rfc3339(end)?,
            parse_timezone(timezone)?,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(CoverageError::InvalidWindow(format!(
                "start {} is not before end {}",
                self.start.to_rfc3339(),
                self.end.to_rfc3339()
            )));
        }
        Ok(())
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// A single assignee's scheduled coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub assignee: AssigneeRef,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Shift {
    /// Build a shift, failing with [`CoverageError::InvalidShift`] unless `start < end`.
    pub fn new(
        id: impl Into<ShiftId>,
        assignee: impl Into<AssigneeRef>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self> {
        let shift = Self {
            id: id.into(),
            assignee: assignee.into(),
            start,
            end,
        };
        shift.validate()?;
        Ok(shift)
    }

    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            return Err(CoverageError::InvalidShift(format!(
                "shift '{}' ends at {} which is not after its start {}",
                self.id,
                self.end.to_rfc3339(),
                self.start.to_rfc3339()
            )));
        }
        Ok(())
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// Tunables for a coverage computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageOptions {
    /// A gap is reported only when strictly longer than this.
    pub gap_threshold: Duration,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            gap_threshold: Duration::seconds(DEFAULT_GAP_THRESHOLD_SECS),
        }
    }
}

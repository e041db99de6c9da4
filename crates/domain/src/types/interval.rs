//! Half-open time intervals
//!
//! `TimeInterval` is the foundation of every scheduling decision. Both ends
//! are UTC instants; `end` is exclusive, so back-to-back bookings
//! (`a.end == b.start`) never overlap.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SlotwiseError};

/// Immutable `[start, end)` range with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unvalidated wire shape, checked through `TryFrom` on deserialization.
#[derive(Deserialize)]
struct RawInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = SlotwiseError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeInterval {
    /// Build an interval, rejecting zero and negative lengths.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidInterval` when `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(SlotwiseError::InvalidInterval(format!(
                "start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Build an interval from a start instant and a positive duration.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidInterval` for non-positive durations or
    /// when the end instant is not representable.
    pub fn starting_at(start: DateTime<Utc>, duration: Duration) -> Result<Self> {
        let end = start.checked_add_signed(duration).ok_or_else(|| {
            SlotwiseError::InvalidInterval(format!("duration {duration} overflows from {start}"))
        })?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// `true` iff the two ranges share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `true` iff `start <= instant < end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// `true` iff `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The shared part of both ranges, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Same duration, moved to begin at `start`.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidInterval` if the shifted end overflows.
    pub fn moved_to(&self, start: DateTime<Utc>) -> Result<Self> {
        Self::starting_at(start, self.duration())
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

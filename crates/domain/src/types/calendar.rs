//! Calendar projection types
//!
//! Derived views over a set of bookings. They are recomputed on every read
//! and never persisted.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::booking::{BookingStatus, DateRange, StatusBucket};
use super::ids::{BookingId, StaffId};
use crate::errors::{Result, SlotwiseError};

/* -------------------------------------------------------------------------- */
/* Positioned cards (day and week views) */
/* -------------------------------------------------------------------------- */

/// A booking positioned on the vertical time axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CalendarCard {
    pub booking_id: BookingId,
    pub staff_id: StaffId,
    pub status: BookingStatus,
    /// Distance from the top of the display window
    pub top_offset: f64,
    /// Rendered height, never below the configured minimum
    pub height: f64,
    /// Side-by-side position among overlapping cards of the same column
    pub lane: usize,
    /// Number of lanes in this card's overlap cluster
    pub lane_count: usize,
}

/// Bookings of one staff member on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DayProjection {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub cards: Vec<CalendarCard>,
    /// Bookings of the day lying entirely outside the display window
    #[serde(default)]
    pub outside_window: Vec<BookingId>,
}

/// One day-of-week column of the week view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WeekColumn {
    pub date: NaiveDate,
    /// 0–6, Sunday = 0
    pub day_of_week: u8,
    pub cards: Vec<CalendarCard>,
    #[serde(default)]
    pub outside_window: Vec<BookingId>,
}

/// Seven consecutive columns starting at `week_start`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WeekProjection {
    pub week_start: NaiveDate,
    pub staff_ids: Vec<StaffId>,
    pub columns: Vec<WeekColumn>,
}

/* -------------------------------------------------------------------------- */
/* Month view */
/* -------------------------------------------------------------------------- */

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CalendarMonth {
    pub year: i32,
    /// 1–12
    pub month: u32,
}

impl CalendarMonth {
    /// # Errors
    /// Returns `SlotwiseError::InvalidInput` for a month outside 1–12 or an
    /// unrepresentable year.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or_else(|| SlotwiseError::InvalidInput(format!("invalid month {year}-{month:02}")))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every date of the month.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidInput` if the month was built with
    /// out-of-range fields.
    pub fn date_range(&self) -> Result<DateRange> {
        let invalid = || {
            SlotwiseError::InvalidInput(format!("invalid month {}-{:02}", self.year, self.month))
        };
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(invalid)?;
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let last = next_first.pred_opt().ok_or_else(invalid)?;
        DateRange::new(first, last)
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Booking counts for one date of the month view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MonthDaySummary {
    pub date: NaiveDate,
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub count_by_status: BTreeMap<BookingStatus, usize>,
}

impl MonthDaySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self { date, ..Self::default() }
    }

    /// Count one booking of `status`.
    pub fn record(&mut self, status: BookingStatus) {
        self.total += 1;
        match status.bucket() {
            StatusBucket::Confirmed => self.confirmed += 1,
            StatusBucket::Pending => self.pending += 1,
            StatusBucket::Cancelled => self.cancelled += 1,
            StatusBucket::TotalOnly => {}
        }
        *self.count_by_status.entry(status).or_insert(0) += 1;
    }
}

/// Month view keyed by date
pub type MonthProjection = BTreeMap<NaiveDate, MonthDaySummary>;

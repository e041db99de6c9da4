//! Booking records as supplied by the booking-persistence collaborator

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::ids::{BookingId, CustomerId, LocationId, ServiceId, StaffId};
use super::interval::TimeInterval;
use crate::errors::{Result, SlotwiseError};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    PendingDeposit,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

crate::impl_domain_status_conversions!(BookingStatus {
    Pending => "pending",
    PendingDeposit => "pending_deposit",
    Confirmed => "confirmed",
    InProgress => "in_progress",
    Completed => "completed",
    Cancelled => "cancelled",
    NoShow => "no_show",
});

/// Month-view bucket a status is counted under (besides the total)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Confirmed,
    Pending,
    Cancelled,
    /// Counted toward the day total only
    TotalOnly,
}

impl BookingStatus {
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::PendingDeposit,
        Self::Confirmed,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::NoShow,
    ];

    /// Whether a booking in this status occupies its slot.
    ///
    /// Cancelled and no-show bookings never block a rebooking.
    pub fn blocks_slot(self) -> bool {
        !matches!(self, Self::Cancelled | Self::NoShow)
    }

    pub fn bucket(self) -> StatusBucket {
        match self {
            Self::Confirmed | Self::InProgress => StatusBucket::Confirmed,
            Self::Pending | Self::PendingDeposit => StatusBucket::Pending,
            Self::Cancelled | Self::NoShow => StatusBucket::Cancelled,
            Self::Completed => StatusBucket::TotalOnly,
        }
    }
}

/// A booking of one customer with one staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Booking {
    pub id: BookingId,
    pub staff_id: StaffId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    pub customer_id: CustomerId,
    pub service_id: ServiceId,
    #[cfg_attr(feature = "ts-gen", ts(type = "{ start: string, end: string }"))]
    pub interval: TimeInterval,
    pub status: BookingStatus,
}

impl Booking {
    /// Create a pending booking without a location.
    pub fn new(
        id: BookingId,
        staff_id: StaffId,
        customer_id: CustomerId,
        service_id: ServiceId,
        interval: TimeInterval,
    ) -> Self {
        Self {
            id,
            staff_id,
            location_id: None,
            customer_id,
            service_id,
            interval,
            status: BookingStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn duration(&self) -> Duration {
        self.interval.duration()
    }

    pub fn blocks_slot(&self) -> bool {
        self.status.blocks_slot()
    }
}

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// # Errors
    /// Returns `SlotwiseError::InvalidInput` when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(SlotwiseError::InvalidInput(format!(
                "date range end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date of the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |day| *day <= self.end)
    }
}

/// Query passed to `BookingRepository::get_bookings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFilter {
    /// `None` selects every staff member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_ids: Option<Vec<StaffId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    pub date_range: DateRange,
}

impl BookingFilter {
    pub fn for_range(date_range: DateRange) -> Self {
        Self { staff_ids: None, location_id: None, date_range }
    }

    pub fn with_staff(mut self, staff_ids: Vec<StaffId>) -> Self {
        self.staff_ids = Some(staff_ids);
        self
    }

    pub fn with_location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }

    /// Staff and location criteria only; the date criterion needs the
    /// business time zone and is applied by the caller.
    pub fn matches_owner(&self, booking: &Booking) -> bool {
        let staff_ok =
            self.staff_ids.as_ref().map_or(true, |ids| ids.contains(&booking.staff_id));
        let location_ok = self
            .location_id
            .as_ref()
            .map_or(true, |location| booking.location_id.as_ref() == Some(location));
        staff_ok && location_ok
    }
}

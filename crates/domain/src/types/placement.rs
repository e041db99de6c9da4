//! Placement requests and their evaluated outcome

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::ids::{BookingId, LocationId, StaffId};
use super::interval::TimeInterval;

/// A proposed `(staff, interval)` for a new or moved booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementCandidate {
    pub staff_id: StaffId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    pub interval: TimeInterval,
    /// Set when moving an existing booking so it does not conflict with
    /// itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_booking_id: Option<BookingId>,
}

impl PlacementCandidate {
    pub fn new(staff_id: StaffId, interval: TimeInterval) -> Self {
        Self { staff_id, location_id: None, interval, exclude_booking_id: None }
    }

    pub fn excluding(mut self, booking_id: BookingId) -> Self {
        self.exclude_booking_id = Some(booking_id);
        self
    }

    pub fn at_location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }
}

/// Outcome of planning a placement, in check-priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementOutcome {
    StaffTimeOff,
    OutsideWorkingHours,
    Conflict,
    Clean,
}

crate::impl_domain_status_conversions!(PlacementOutcome {
    StaffTimeOff => "staff_time_off",
    OutsideWorkingHours => "outside_working_hours",
    Conflict => "conflict",
    Clean => "clean",
});

impl PlacementOutcome {
    /// Outcomes that warn without blocking the placement.
    pub fn is_advisory(self) -> bool {
        matches!(self, Self::StaffTimeOff | Self::OutsideWorkingHours)
    }
}

/// Result of one planning call; never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PlacementResult {
    pub outcome: PlacementOutcome,
    #[serde(default)]
    pub conflicting_bookings: Vec<BookingId>,
}

impl PlacementResult {
    pub fn clean() -> Self {
        Self { outcome: PlacementOutcome::Clean, conflicting_bookings: Vec::new() }
    }

    pub fn staff_time_off() -> Self {
        Self { outcome: PlacementOutcome::StaffTimeOff, conflicting_bookings: Vec::new() }
    }

    pub fn outside_working_hours() -> Self {
        Self { outcome: PlacementOutcome::OutsideWorkingHours, conflicting_bookings: Vec::new() }
    }

    pub fn conflict(conflicting_bookings: Vec<BookingId>) -> Self {
        Self { outcome: PlacementOutcome::Conflict, conflicting_bookings }
    }

    pub fn is_clean(&self) -> bool {
        self.outcome == PlacementOutcome::Clean
    }

    /// Only conflicts need an explicit override before commit.
    pub fn requires_override(&self) -> bool {
        self.outcome == PlacementOutcome::Conflict
    }
}

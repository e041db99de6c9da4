//! Port interfaces for the scheduling engine
//!
//! These traits define the boundaries between the engine and whatever
//! stores bookings, staff schedules and customers. Reads assemble the
//! snapshot the pure planners run against; the commit is the single write.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slotwise_domain::{
    Booking, BookingFilter, BookingId, CustomerId, DateRange, Result, StaffId, TimeInterval,
    TimeOffRange, WorkingHoursTemplate,
};

/// Weekly working-hours templates
#[async_trait]
pub trait WorkingHoursRepository: Send + Sync {
    /// Template of one staff member.
    ///
    /// Returns `SlotwiseError::NotFound` when the staff member has none.
    async fn get_working_hours(&self, staff_id: &StaffId) -> Result<WorkingHoursTemplate>;
}

/// Staff time off
#[async_trait]
pub trait TimeOffRepository: Send + Sync {
    /// Ranges of `staff_id` touching `date_range`, reversed ones included.
    async fn get_time_off(&self, staff_id: &StaffId, date_range: DateRange)
        -> Result<Vec<TimeOffRange>>;
}

/// Booking reads
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings matching `filter`, in any status.
    async fn get_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>>;
}

/// A move the user confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    pub booking_id: BookingId,
    pub new_staff_id: StaffId,
    pub new_interval: TimeInterval,
    /// Conflicts shown to the user when they confirmed
    #[serde(default)]
    pub acknowledged_conflicts: Vec<BookingId>,
}

/// Authoritative write of a reschedule
#[async_trait]
pub trait BookingCommitter: Send + Sync {
    /// Re-validate against the latest bookings and apply the move.
    ///
    /// Returns `SlotwiseError::Conflict` when another booking now overlaps
    /// that was not acknowledged, with nothing written. Re-committing a move
    /// that is already applied succeeds without change.
    async fn commit_reschedule(&self, request: CommitRequest) -> Result<Booking>;
}

/// Customer display names for the conflict warning
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Names of the known customers among `customer_ids`; unknown ids are
    /// left out of the map.
    async fn customer_names(&self, customer_ids: &[CustomerId])
        -> Result<HashMap<CustomerId, String>>;
}

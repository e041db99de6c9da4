//! Turning a drop position into a candidate placement

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use slotwise_domain::constants::{DEFAULT_CELL_HEIGHT, MINUTES_PER_HOUR};
use slotwise_domain::{
    Booking, PlacementCandidate, RescheduleConfig, Result, SlotwiseError, StaffId, TimeInterval,
};

use tracing::warn;

use crate::scheduling::BusinessZone;

/// Where the user released the dragged booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    /// An hour cell of the grid and the vertical offset inside it
    Cell { staff_id: StaffId, date: NaiveDate, hour: u32, offset: f64 },
    /// An explicit start picked from a list of slots
    Slot { staff_id: StaffId, start: DateTime<Utc> },
}

impl DropTarget {
    pub fn staff_id(&self) -> &StaffId {
        match self {
            Self::Cell { staff_id, .. } | Self::Slot { staff_id, .. } => staff_id,
        }
    }
}

/// Snap granularity and drop-cell geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapper {
    snap_minutes: u32,
    cell_height: f64,
}

impl Default for Snapper {
    fn default() -> Self {
        Self::from_config(&RescheduleConfig::default())
    }
}

impl Snapper {
    /// Geometry from `config`; a cell height that is not a positive number
    /// falls back to the default.
    pub fn from_config(config: &RescheduleConfig) -> Self {
        let cell_height = if config.cell_height > 0.0 && config.cell_height.is_finite() {
            config.cell_height
        } else {
            warn!(
                cell_height = config.cell_height,
                fallback = DEFAULT_CELL_HEIGHT,
                "invalid drop cell height; using the default"
            );
            DEFAULT_CELL_HEIGHT
        };
        Self { snap_minutes: config.snap_minutes.max(1), cell_height }
    }

    /// Minute within the hour for a vertical `offset` inside the cell.
    ///
    /// Snaps to the nearest multiple of the snap granularity; an exact tie
    /// rounds down. May return 60, meaning the top of the next hour.
    pub fn snap_minute(&self, offset: f64) -> u32 {
        let offset = if offset.is_finite() { offset.clamp(0.0, self.cell_height) } else { 0.0 };
        let raw = offset / self.cell_height * f64::from(MINUTES_PER_HOUR);
        let steps = raw / f64::from(self.snap_minutes);
        let lower = steps.floor();
        let snapped = if steps - lower > 0.5 { lower + 1.0 } else { lower };
        // bounded by 60 / snap_minutes after the clamp
        snapped as u32 * self.snap_minutes
    }

    /// Local start of a cell drop, converted to an instant.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidInput` for an hour outside 0–23.
    pub fn cell_start(
        &self,
        zone: BusinessZone,
        date: NaiveDate,
        hour: u32,
        offset: f64,
    ) -> Result<DateTime<Utc>> {
        let top_of_hour = NaiveTime::from_hms_opt(hour, 0, 0)
            .ok_or_else(|| SlotwiseError::InvalidInput(format!("hour {hour} is not 0-23")))?;
        let minute = i64::from(self.snap_minute(offset));
        Ok(zone.local_to_utc(date.and_time(top_of_hour) + Duration::minutes(minute)))
    }

    /// Candidate for moving `booking` to `target`.
    ///
    /// Keeps the booking's duration and location and excludes the booking
    /// itself from conflict detection.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidInput` for an impossible cell and
    /// `SlotwiseError::InvalidInterval` when the moved interval overflows.
    pub fn candidate_for(
        &self,
        zone: BusinessZone,
        booking: &Booking,
        target: &DropTarget,
    ) -> Result<PlacementCandidate> {
        let start = match target {
            DropTarget::Cell { date, hour, offset, .. } => {
                self.cell_start(zone, *date, *hour, *offset)?
            }
            DropTarget::Slot { start, .. } => *start,
        };
        let interval = TimeInterval::starting_at(start, booking.duration())?;

        let candidate = PlacementCandidate::new(target.staff_id().clone(), interval)
            .excluding(booking.id.clone());
        Ok(match &booking.location_id {
            Some(location) => candidate.at_location(location.clone()),
            None => candidate,
        })
    }
}

//! Placement planner
//!
//! Evaluates a candidate placement against one consistent snapshot of
//! working hours, time off and existing bookings. Nothing is committed here;
//! the result only tells the caller what would happen.
//!
//! Checks run in a fixed priority and the first failing one decides:
//! 1. time off on the candidate's local start date → `StaffTimeOff`
//! 2. either boundary outside working hours → `OutsideWorkingHours`
//! 3. overlapping bookings → `Conflict` (all of them)
//! 4. otherwise → `Clean`

use slotwise_domain::{
    Booking, PlacementCandidate, PlacementResult, TimeOffRange, WorkingHoursTemplate,
};
use tracing::{debug, warn};

use super::availability::AvailabilityResolver;
use super::conflict::find_conflicts;
use super::zone::BusinessZone;

/// Borrowed snapshot a planning call runs against
#[derive(Debug, Clone, Copy)]
pub struct PlanningContext<'a> {
    pub working_hours: &'a WorkingHoursTemplate,
    pub time_off: &'a [TimeOffRange],
    pub existing_bookings: &'a [Booking],
}

/// Stateless planner bound to the business time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementPlanner {
    zone: BusinessZone,
}

impl PlacementPlanner {
    pub fn new(zone: BusinessZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> BusinessZone {
        self.zone
    }

    /// Evaluate `candidate` against `context`.
    pub fn plan(
        &self,
        candidate: &PlacementCandidate,
        context: PlanningContext<'_>,
    ) -> PlacementResult {
        let resolver =
            AvailabilityResolver::new(self.zone, context.working_hours, context.time_off);
        let start_date = self.zone.date_of(candidate.interval.start());

        let result = if resolver.has_time_off(&candidate.staff_id, start_date) {
            PlacementResult::staff_time_off()
        } else if !self.template_matches(candidate, context.working_hours)
            || !resolver.covers_interval(&candidate.interval)
        {
            PlacementResult::outside_working_hours()
        } else {
            let conflicts = find_conflicts(candidate, context.existing_bookings);
            if conflicts.is_empty() {
                PlacementResult::clean()
            } else {
                PlacementResult::conflict(conflicts)
            }
        };

        debug!(
            staff_id = %candidate.staff_id,
            interval = %candidate.interval,
            outcome = %result.outcome,
            conflicts = result.conflicting_bookings.len(),
            "placement planned"
        );
        result
    }

    /// A template of another staff member says nothing about this one.
    fn template_matches(
        &self,
        candidate: &PlacementCandidate,
        template: &WorkingHoursTemplate,
    ) -> bool {
        let matches = template.staff_id == candidate.staff_id;
        if !matches {
            warn!(
                staff_id = %candidate.staff_id,
                template_staff_id = %template.staff_id,
                "working hours belong to another staff member; treating as unavailable"
            );
        }
        matches
    }
}

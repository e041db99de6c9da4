//! # Slotwise Core
//!
//! Pure scheduling engine - no infrastructure dependencies.
//!
//! This crate contains:
//! - Availability, conflict detection and placement planning
//! - Calendar projections (day, week, month)
//! - The reschedule state machine and its async driver
//! - Port interfaces (traits) for every collaborator
//!
//! ## Architecture Principles
//! - Only depends on `slotwise-domain`
//! - No database, HTTP, or platform code
//! - All external data arrives through the ports in [`ports`]
//! - Planners run synchronously over immutable snapshots

pub mod calendar;
pub mod ports;
pub mod reschedule;
pub mod scheduling;

pub use calendar::CalendarAggregator;
pub use ports::{
    BookingCommitter, BookingRepository, CommitRequest, CustomerDirectory, TimeOffRepository,
    WorkingHoursRepository,
};
pub use reschedule::{
    ConflictDetail, DropTarget, ReschedulePhase, RescheduleState, RescheduleWorkflow,
};
pub use scheduling::{
    find_conflicts, AvailabilityResolver, BusinessZone, PlacementPlanner, PlanningContext,
    ScheduleSnapshot, SchedulingService,
};

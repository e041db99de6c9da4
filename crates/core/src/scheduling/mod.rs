//! Scheduling: time zone handling, interval sets, availability, conflict
//! detection and placement planning.

pub mod availability;
pub mod conflict;
pub mod interval;
pub mod planner;
pub mod service;
pub mod zone;

pub use availability::AvailabilityResolver;
pub use conflict::{conflicting_bookings, find_conflicts};
pub use planner::{PlacementPlanner, PlanningContext};
pub use service::{ScheduleSnapshot, SchedulingService};
pub use zone::BusinessZone;

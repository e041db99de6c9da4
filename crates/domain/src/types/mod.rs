//! Domain types and models
//!
//! Plain data exchanged between the engine and its collaborators. Every type
//! is `serde`-serializable so it can cross any transport.

pub mod booking;
pub mod calendar;
pub mod ids;
pub mod interval;
pub mod placement;
pub mod staff;

pub use booking::{Booking, BookingFilter, BookingStatus, DateRange, StatusBucket};
pub use calendar::{
    CalendarCard, CalendarMonth, DayProjection, MonthDaySummary, MonthProjection, WeekColumn,
    WeekProjection,
};
pub use ids::{BookingId, CustomerId, LocationId, ServiceId, StaffId, TimeOffId};
pub use interval::TimeInterval;
pub use placement::{PlacementCandidate, PlacementOutcome, PlacementResult};
pub use staff::{
    day_of_week_index, DaySchedule, TimeOffRange, WorkingHoursEntry, WorkingHoursTemplate,
};

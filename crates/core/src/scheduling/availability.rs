//! Availability resolver
//!
//! Answers "is this staff member working at this time?" from a weekly
//! working-hours template and a set of time-off ranges. Missing or malformed
//! data resolves to *unavailable* instead of failing, and a time-off day
//! blocks the whole day whatever the template says.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use slotwise_domain::{
    Booking, DaySchedule, StaffId, TimeInterval, TimeOffRange, WorkingHoursTemplate,
};
use tracing::{debug, warn};

use super::interval::subtract;
use super::zone::BusinessZone;

/// Pure view over one staff member's availability snapshot
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityResolver<'a> {
    zone: BusinessZone,
    working_hours: &'a WorkingHoursTemplate,
    time_off: &'a [TimeOffRange],
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(
        zone: BusinessZone,
        working_hours: &'a WorkingHoursTemplate,
        time_off: &'a [TimeOffRange],
    ) -> Self {
        Self { zone, working_hours, time_off }
    }

    pub fn staff_id(&self) -> &StaffId {
        &self.working_hours.staff_id
    }

    /// Template entry for the weekday of `date`.
    pub fn schedule_on(&self, date: NaiveDate) -> DaySchedule {
        let schedule = self.working_hours.schedule_for(date.weekday());
        if schedule == DaySchedule::Malformed {
            warn!(
                staff_id = %self.staff_id(),
                %date,
                "malformed working-hours entry; treating day as unavailable"
            );
        }
        schedule
    }

    /// Whether any time-off range of this staff member covers `date`.
    pub fn is_on_time_off(&self, date: NaiveDate) -> bool {
        self.has_time_off(self.staff_id(), date)
    }

    /// Whether any time-off range of `staff_id` covers `date`, whoever the
    /// working-hours template belongs to.
    pub fn has_time_off(&self, staff_id: &StaffId, date: NaiveDate) -> bool {
        self.time_off.iter().filter(|range| &range.staff_id == staff_id).any(|range| {
            if range.is_reversed() {
                debug!(
                    time_off_id = %range.id,
                    %date,
                    "reversed time-off range; checking the dates between its endpoints"
                );
            }
            range.covers(date)
        })
    }

    /// Whether the local time-of-day of `instant` lies in the working hours
    /// of its local weekday.
    ///
    /// Time off is *not* considered here; see [`Self::is_available`].
    pub fn is_within_working_hours(&self, instant: DateTime<Utc>) -> bool {
        let date = self.zone.date_of(instant);
        let time = self.zone.time_of(instant);
        self.schedule_on(date).window().is_some_and(|(start, end)| start <= time && time < end)
    }

    /// The working window of `date` as absolute instants.
    pub fn working_window(&self, date: NaiveDate) -> Option<TimeInterval> {
        let (start, end) = self.schedule_on(date).window()?;
        TimeInterval::new(self.zone.to_instant(date, start), self.zone.to_instant(date, end)).ok()
    }

    /// Whether both boundaries of `interval` fall inside the working window
    /// of the start's local date.
    ///
    /// The end is exclusive, so a booking ending exactly at closing time is
    /// inside.
    pub fn covers_interval(&self, interval: &TimeInterval) -> bool {
        self.working_window(self.zone.date_of(interval.start()))
            .is_some_and(|window| window.encloses(interval))
    }

    /// Working hours and no time off.
    pub fn is_available(&self, interval: &TimeInterval) -> bool {
        !self.is_on_time_off(self.zone.date_of(interval.start())) && self.covers_interval(interval)
    }

    /// The bookable parts of `date`: the working window minus every booking
    /// of this staff member that still occupies its slot.
    pub fn bookable_windows(&self, date: NaiveDate, bookings: &[Booking]) -> Vec<TimeInterval> {
        if self.is_on_time_off(date) {
            return Vec::new();
        }
        let Some(window) = self.working_window(date) else {
            return Vec::new();
        };

        let occupied: Vec<TimeInterval> = bookings
            .iter()
            .filter(|booking| &booking.staff_id == self.staff_id() && booking.blocks_slot())
            .map(|booking| booking.interval)
            .filter(|interval| interval.overlaps(&window))
            .collect();

        subtract(&window, &occupied)
    }
}

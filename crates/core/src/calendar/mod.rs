//! Calendar aggregator
//!
//! Pure projections of a booking set into day, week and month views. Views
//! are recomputed on every query; nothing is cached between calls.

pub mod day;
pub mod layout;
pub mod month;
pub mod week;

use chrono::NaiveDate;
use slotwise_domain::{
    Booking, CalendarConfig, CalendarMonth, DayProjection, MonthProjection, Result, StaffId,
    WeekProjection, WeekStart,
};

pub use layout::{CardLayout, ColumnLayout};
pub use week::week_start_for;

use crate::scheduling::BusinessZone;

/// Projects bookings into calendar views in the business time zone
#[derive(Debug, Clone, Copy)]
pub struct CalendarAggregator {
    zone: BusinessZone,
    layout: CardLayout,
    week_starts_on: WeekStart,
}

impl Default for CalendarAggregator {
    fn default() -> Self {
        Self::new(BusinessZone::utc(), &CalendarConfig::default())
    }
}

impl CalendarAggregator {
    pub fn new(zone: BusinessZone, config: &CalendarConfig) -> Self {
        Self {
            zone,
            layout: CardLayout::from_config(config),
            week_starts_on: config.week_starts_on,
        }
    }

    pub fn zone(&self) -> BusinessZone {
        self.zone
    }

    /// First date of the configured week containing `date`.
    pub fn week_start_for(&self, date: NaiveDate) -> NaiveDate {
        week_start_for(date, self.week_starts_on)
    }

    pub fn project_day(
        &self,
        staff_id: &StaffId,
        date: NaiveDate,
        bookings: &[Booking],
    ) -> DayProjection {
        day::project_day(self.zone, &self.layout, staff_id, date, bookings)
    }

    pub fn project_week(
        &self,
        staff_ids: &[StaffId],
        week_start: NaiveDate,
        bookings: &[Booking],
    ) -> WeekProjection {
        week::project_week(self.zone, &self.layout, staff_ids, week_start, bookings)
    }

    /// # Errors
    /// Returns `SlotwiseError::InvalidInput` for a month with out-of-range
    /// fields.
    pub fn project_month(
        &self,
        month: CalendarMonth,
        bookings: &[Booking],
    ) -> Result<MonthProjection> {
        month::project_month(self.zone, month, bookings)
    }
}

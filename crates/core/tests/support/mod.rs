//! Shared test helpers for `slotwise-core` integration tests.
//!
//! Fixtures for the reference week (Monday 2026-03-02, UTC business zone)
//! and in-memory mocks for every port.

#![allow(dead_code)]

pub mod repositories;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use slotwise_core::{BusinessZone, SchedulingService};
use slotwise_domain::{
    Booking, BookingId, BookingStatus, CustomerId, ServiceId, StaffId, TimeInterval,
    TimeOffRange, WorkingHoursTemplate,
};

pub use repositories::{
    MockBookingRepository, MockCommitter, MockCustomerDirectory, MockTimeOffRepository,
    MockWorkingHoursRepository,
};

/// Instant in March 2026, UTC.
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
}

pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

pub fn interval(day: u32, from: (u32, u32), to: (u32, u32)) -> TimeInterval {
    TimeInterval::new(at(day, from.0, from.1), at(day, to.0, to.1)).unwrap()
}

pub fn staff(id: &str) -> StaffId {
    StaffId::from(id)
}

/// Monday to Friday, 09:00–17:00.
pub fn office_hours(staff_id: &str) -> WorkingHoursTemplate {
    WorkingHoursTemplate::uniform(
        staff(staff_id),
        &[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    )
}

pub fn booking(id: &str, staff_id: &str, customer: &str, slot: TimeInterval) -> Booking {
    Booking::new(
        BookingId::from(id),
        staff(staff_id),
        CustomerId::from(customer),
        ServiceId::from("consultation"),
        slot,
    )
    .with_status(BookingStatus::Confirmed)
}

/// B1: S1, Monday 10:00–11:00, customer C1.
pub fn b1() -> Booking {
    booking("B1", "S1", "C1", interval(2, (10, 0), (11, 0)))
}

/// Wired-up mocks plus a service over them.
pub struct Harness {
    pub working_hours: Arc<MockWorkingHoursRepository>,
    pub time_off: Arc<MockTimeOffRepository>,
    pub bookings: Arc<MockBookingRepository>,
    pub service: Arc<SchedulingService>,
}

impl Harness {
    pub fn new(
        templates: Vec<WorkingHoursTemplate>,
        time_off: Vec<TimeOffRange>,
        bookings: Vec<Booking>,
    ) -> Self {
        let working_hours = Arc::new(MockWorkingHoursRepository::new(templates));
        let time_off = Arc::new(MockTimeOffRepository::new(time_off));
        let bookings = Arc::new(MockBookingRepository::new(bookings));
        let service = Arc::new(SchedulingService::new(
            working_hours.clone(),
            time_off.clone(),
            bookings.clone(),
            BusinessZone::utc(),
        ));
        Self { working_hours, time_off, bookings, service }
    }

    /// S1 on office hours with B1 booked.
    pub fn reference() -> Self {
        Self::new(vec![office_hours("S1")], Vec::new(), vec![b1()])
    }
}

//! Day view

use chrono::NaiveDate;
use slotwise_domain::{Booking, DayProjection, StaffId};

use super::layout::CardLayout;
use crate::scheduling::BusinessZone;

/// Project the bookings of `staff_id` whose local start date is `date`.
pub fn project_day(
    zone: BusinessZone,
    layout: &CardLayout,
    staff_id: &StaffId,
    date: NaiveDate,
    bookings: &[Booking],
) -> DayProjection {
    let todays: Vec<&Booking> = bookings
        .iter()
        .filter(|booking| &booking.staff_id == staff_id)
        .filter(|booking| zone.date_of(booking.interval.start()) == date)
        .collect();

    let column = layout.layout_column(zone, date, &todays);
    DayProjection {
        staff_id: staff_id.clone(),
        date,
        cards: column.cards,
        outside_window: column.outside_window,
    }
}

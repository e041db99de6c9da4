//! Month view

use slotwise_domain::{Booking, CalendarMonth, MonthDaySummary, MonthProjection, Result};

use crate::scheduling::BusinessZone;

/// Per-date status counts for every date of `month`.
///
/// Bookings count on their local start date; dates without bookings are
/// present with zero counts.
///
/// # Errors
/// Returns `SlotwiseError::InvalidInput` for a month with out-of-range
/// fields.
pub fn project_month(
    zone: BusinessZone,
    month: CalendarMonth,
    bookings: &[Booking],
) -> Result<MonthProjection> {
    let range = month.date_range()?;
    let mut projection: MonthProjection =
        range.days().map(|date| (date, MonthDaySummary::empty(date))).collect();

    for booking in bookings {
        let date = zone.date_of(booking.interval.start());
        if let Some(summary) = projection.get_mut(&date) {
            summary.record(booking.status);
        }
    }
    Ok(projection)
}

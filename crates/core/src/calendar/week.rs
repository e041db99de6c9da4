//! Week view

use chrono::{Datelike, Duration, NaiveDate};
use slotwise_domain::constants::DAYS_PER_WEEK;
use slotwise_domain::{day_of_week_index, Booking, StaffId, WeekColumn, WeekProjection, WeekStart};

use super::layout::CardLayout;
use crate::scheduling::BusinessZone;

/// First date of the week containing `date`.
pub fn week_start_for(date: NaiveDate, starts_on: WeekStart) -> NaiveDate {
    let days_back = match starts_on {
        WeekStart::Monday => date.weekday().num_days_from_monday(),
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
    };
    date - Duration::days(i64::from(days_back))
}

/// Seven columns from `week_start`, showing the bookings of `staff_ids`.
///
/// An empty staff selection yields seven empty columns.
pub fn project_week(
    zone: BusinessZone,
    layout: &CardLayout,
    staff_ids: &[StaffId],
    week_start: NaiveDate,
    bookings: &[Booking],
) -> WeekProjection {
    let selected: Vec<&Booking> =
        bookings.iter().filter(|booking| staff_ids.contains(&booking.staff_id)).collect();

    let columns = week_start
        .iter_days()
        .take(DAYS_PER_WEEK)
        .map(|date| {
            let on_date: Vec<&Booking> = selected
                .iter()
                .copied()
                .filter(|booking| zone.date_of(booking.interval.start()) == date)
                .collect();
            let column = layout.layout_column(zone, date, &on_date);
            WeekColumn {
                date,
                day_of_week: day_of_week_index(date.weekday()),
                cards: column.cards,
                outside_window: column.outside_window,
            }
        })
        .collect();

    WeekProjection { week_start, staff_ids: staff_ids.to_vec(), columns }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use slotwise_domain::{BookingId, CustomerId, ServiceId, TimeInterval};

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn at(day: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, h, 0, 0).unwrap()
    }

    fn booking(id: &str, staff: &str, day: u32, from: u32, to: u32) -> Booking {
        Booking::new(
            BookingId::from(id),
            StaffId::from(staff),
            CustomerId::from("C1"),
            ServiceId::from("cut"),
            TimeInterval::new(at(day, from), at(day, to)).unwrap(),
        )
    }

    #[test]
    fn week_start_respects_configured_first_day() {
        // 2026-03-04 is a Wednesday
        assert_eq!(week_start_for(date(4), WeekStart::Monday), date(2));
        assert_eq!(week_start_for(date(4), WeekStart::Sunday), date(1));
        assert_eq!(week_start_for(date(2), WeekStart::Monday), date(2));
        assert_eq!(week_start_for(date(1), WeekStart::Sunday), date(1));
    }

    #[test]
    fn columns_hold_selected_staff_only() {
        let bookings = vec![
            booking("B1", "S1", 2, 10, 11),
            booking("B2", "S2", 2, 10, 11),
            booking("B3", "S3", 4, 12, 13),
            booking("B4", "S1", 9, 10, 11),
        ];
        let staff = vec![StaffId::from("S1"), StaffId::from("S2")];
        let week =
            project_week(BusinessZone::utc(), &CardLayout::default(), &staff, date(2), &bookings);

        assert_eq!(week.columns.len(), 7);
        assert_eq!(week.columns[0].day_of_week, 1);
        assert_eq!(week.columns[6].date, date(8));

        let monday = &week.columns[0];
        assert_eq!(monday.cards.len(), 2);
        assert!(monday.cards.iter().all(|card| card.lane_count == 2));
        assert!(week.columns[2].cards.is_empty());
    }

    #[test]
    fn empty_selection_shows_nothing() {
        let bookings = vec![booking("B1", "S1", 2, 10, 11)];
        let week =
            project_week(BusinessZone::utc(), &CardLayout::default(), &[], date(2), &bookings);
        assert!(week.columns.iter().all(|column| column.cards.is_empty()));
    }
}

//! Vertical card geometry for the day and week views
//!
//! Positions are fractional hours of the local day scaled by the slot
//! height. Cards are clipped to the display window; a booking with nothing
//! left after clipping is reported separately instead of being drawn.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use slotwise_domain::{Booking, BookingId, CalendarCard, CalendarConfig};

use crate::scheduling::BusinessZone;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Cards of one column plus the bookings that did not fit the window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnLayout {
    pub cards: Vec<CalendarCard>,
    pub outside_window: Vec<BookingId>,
}

/// Display window and scale of the vertical time axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    display_start_hour: f64,
    display_end_hour: f64,
    slot_height: f64,
    min_card_height: f64,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::from_config(&CalendarConfig::default())
    }
}

impl CardLayout {
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self {
            display_start_hour: f64::from(config.display_start_hour),
            display_end_hour: f64::from(config.display_end_hour),
            slot_height: config.slot_height,
            min_card_height: config.min_card_height,
        }
    }

    /// Lay out `bookings` in the column of `date`.
    ///
    /// Callers pass only the bookings belonging to the column; hours are
    /// measured from local midnight of `date`, so a booking running past
    /// midnight keeps growing past 24.
    pub fn layout_column(
        &self,
        zone: BusinessZone,
        date: NaiveDate,
        bookings: &[&Booking],
    ) -> ColumnLayout {
        let mut column = ColumnLayout::default();
        let mut cards = Vec::with_capacity(bookings.len());

        for booking in bookings {
            let start_hour = hours_since_midnight(zone, date, booking.interval.start());
            let end_hour = hours_since_midnight(zone, date, booking.interval.end());

            let visible_start = start_hour.max(self.display_start_hour);
            let visible_end = end_hour.min(self.display_end_hour);
            if visible_end <= visible_start {
                column.outside_window.push(booking.id.clone());
                continue;
            }

            cards.push(CalendarCard {
                booking_id: booking.id.clone(),
                staff_id: booking.staff_id.clone(),
                status: booking.status,
                top_offset: (visible_start - self.display_start_hour) * self.slot_height,
                height: ((visible_end - visible_start) * self.slot_height)
                    .max(self.min_card_height),
                lane: 0,
                lane_count: 1,
            });
        }

        assign_lanes(&mut cards);
        column.cards = cards;
        column.outside_window.sort();
        column
    }
}

fn hours_since_midnight(zone: BusinessZone, date: NaiveDate, instant: DateTime<Utc>) -> f64 {
    let midnight = date.and_time(NaiveTime::MIN);
    let local = zone.local(instant).naive_local();
    (local - midnight).num_seconds() as f64 / SECONDS_PER_HOUR
}

/// Sort cards top to bottom and give overlapping ones distinct lanes.
///
/// Overlap is visual: two cards share a cluster while one's drawn box
/// reaches into the other's, minimum height included. Each card takes the
/// lowest free lane and every card of a cluster reports the cluster's lane
/// count.
fn assign_lanes(cards: &mut [CalendarCard]) {
    cards.sort_by(|a, b| {
        a.top_offset
            .total_cmp(&b.top_offset)
            .then_with(|| b.height.total_cmp(&a.height))
            .then_with(|| a.booking_id.cmp(&b.booking_id))
    });

    let mut cluster_start = 0;
    let mut cluster_bottom = f64::NEG_INFINITY;
    // bottom edge of the last card in each lane of the open cluster
    let mut lane_bottoms: Vec<f64> = Vec::new();

    for index in 0..cards.len() {
        let top = cards[index].top_offset;
        let bottom = top + cards[index].height;

        if top >= cluster_bottom {
            close_cluster(&mut cards[cluster_start..index], lane_bottoms.len());
            cluster_start = index;
            lane_bottoms.clear();
        }

        let lane = match lane_bottoms.iter().position(|&lane_bottom| lane_bottom <= top) {
            Some(free) => {
                lane_bottoms[free] = bottom;
                free
            }
            None => {
                lane_bottoms.push(bottom);
                lane_bottoms.len() - 1
            }
        };
        cards[index].lane = lane;
        cluster_bottom = if index == cluster_start { bottom } else { cluster_bottom.max(bottom) };
    }
    let len = cards.len();
    close_cluster(&mut cards[cluster_start..len], lane_bottoms.len());
}

fn close_cluster(cluster: &mut [CalendarCard], lane_count: usize) {
    for card in cluster {
        card.lane_count = lane_count.max(1);
    }
}

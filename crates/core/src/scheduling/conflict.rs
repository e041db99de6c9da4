//! Conflict detector
//!
//! Finds every existing booking a candidate placement would overlap. The
//! full set is returned, never just the first hit, because the confirmation
//! step lists all of them.

use slotwise_domain::{Booking, BookingId, PlacementCandidate};

/// Whether `booking` competes with `candidate` for the same staff time.
fn competes(candidate: &PlacementCandidate, booking: &Booking) -> bool {
    booking.staff_id == candidate.staff_id
        && candidate.exclude_booking_id.as_ref() != Some(&booking.id)
        && booking.blocks_slot()
}

/// Bookings overlapping the candidate, ordered by start time then id.
///
/// Ignores other staff members, the booking being moved, and cancelled or
/// no-show bookings.
pub fn conflicting_bookings<'a>(
    candidate: &PlacementCandidate,
    existing: &'a [Booking],
) -> Vec<&'a Booking> {
    let mut conflicts: Vec<&Booking> = existing
        .iter()
        .filter(|booking| competes(candidate, booking))
        .filter(|booking| booking.interval.overlaps(&candidate.interval))
        .collect();
    conflicts.sort_by(|a, b| a.interval.cmp(&b.interval).then_with(|| a.id.cmp(&b.id)));
    conflicts
}

/// Ids of the bookings overlapping the candidate.
pub fn find_conflicts(candidate: &PlacementCandidate, existing: &[Booking]) -> Vec<BookingId> {
    conflicting_bookings(candidate, existing)
        .into_iter()
        .map(|booking| booking.id.clone())
        .collect()
}

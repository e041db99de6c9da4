//! End-to-end placement planning through `SchedulingService`.

mod support;

use slotwise_domain::{
    BookingId, BookingStatus, PlacementCandidate, PlacementOutcome, PlacementResult, TimeOffId,
    TimeOffRange,
};
use support::{b1, booking, interval, march, office_hours, staff, Harness};

#[tokio::test]
async fn next_slot_is_clean_and_overlap_is_a_conflict() {
    let harness = Harness::reference();

    let clean = PlacementCandidate::new(staff("S1"), interval(2, (11, 0), (12, 0)));
    assert_eq!(harness.service.plan_placement(&clean).await.unwrap(), PlacementResult::clean());

    let overlapping = PlacementCandidate::new(staff("S1"), interval(2, (10, 30), (11, 30)));
    let result = harness.service.plan_placement(&overlapping).await.unwrap();
    assert_eq!(result.outcome, PlacementOutcome::Conflict);
    assert_eq!(result.conflicting_bookings, vec![BookingId::from("B1")]);
}

#[tokio::test]
async fn time_off_week_blocks_placement() {
    let time_off = vec![TimeOffRange::new(TimeOffId::from("T1"), staff("S1"), march(1), march(5))];
    let harness = Harness::new(vec![office_hours("S1")], time_off, vec![b1()]);

    let candidate = PlacementCandidate::new(staff("S1"), interval(3, (14, 0), (15, 0)));
    let result = harness.service.plan_placement(&candidate).await.unwrap();
    assert_eq!(result.outcome, PlacementOutcome::StaffTimeOff);
    assert!(result.conflicting_bookings.is_empty());

    // time off beats the conflict with B1 as well
    let overlapping = PlacementCandidate::new(staff("S1"), interval(2, (10, 0), (11, 0)));
    let result = harness.service.plan_placement(&overlapping).await.unwrap();
    assert_eq!(result.outcome, PlacementOutcome::StaffTimeOff);
}

#[tokio::test]
async fn reversed_time_off_still_blocks() {
    let time_off = vec![TimeOffRange::new(TimeOffId::from("T1"), staff("S1"), march(5), march(3))];
    let harness = Harness::new(vec![office_hours("S1")], time_off, Vec::new());

    assert!(harness.service.is_on_time_off(&staff("S1"), march(4)).await.unwrap());
    let candidate = PlacementCandidate::new(staff("S1"), interval(4, (10, 0), (11, 0)));
    let result = harness.service.plan_placement(&candidate).await.unwrap();
    assert_eq!(result.outcome, PlacementOutcome::StaffTimeOff);
}

#[tokio::test]
async fn outside_working_hours_is_reported_before_conflicts() {
    let late = booking("B2", "S1", "C2", interval(2, (16, 0), (17, 0)));
    let harness = Harness::new(vec![office_hours("S1")], Vec::new(), vec![b1(), late]);

    let overrun = PlacementCandidate::new(staff("S1"), interval(2, (16, 30), (17, 30)));
    let result = harness.service.plan_placement(&overrun).await.unwrap();
    assert_eq!(result.outcome, PlacementOutcome::OutsideWorkingHours);
    assert!(result.conflicting_bookings.is_empty());
}

#[tokio::test]
async fn unknown_staff_is_unavailable_rather_than_an_error() {
    let harness = Harness::reference();
    let candidate = PlacementCandidate::new(staff("S9"), interval(2, (11, 0), (12, 0)));
    let result = harness.service.plan_placement(&candidate).await.unwrap();
    assert_eq!(result.outcome, PlacementOutcome::OutsideWorkingHours);
    let working = harness
        .service
        .is_within_working_hours(&staff("S9"), support::at(2, 11, 0))
        .await
        .unwrap();
    assert!(!working);
}

#[tokio::test]
async fn cancelled_bookings_never_conflict() {
    let cancelled = b1().with_status(BookingStatus::Cancelled);
    let harness = Harness::new(vec![office_hours("S1")], Vec::new(), vec![cancelled]);

    let candidate = PlacementCandidate::new(staff("S1"), interval(2, (10, 0), (11, 0)));
    assert!(harness.service.plan_placement(&candidate).await.unwrap().is_clean());
}

#[tokio::test]
async fn moving_a_booking_ignores_itself() {
    let harness = Harness::reference();
    let candidate = PlacementCandidate::new(staff("S1"), interval(2, (10, 30), (11, 30)))
        .excluding(BookingId::from("B1"));
    assert!(harness.service.plan_placement(&candidate).await.unwrap().is_clean());
}

#[tokio::test]
async fn every_conflict_is_listed() {
    let harness = Harness::new(
        vec![office_hours("S1")],
        Vec::new(),
        vec![
            b1(),
            booking("B2", "S1", "C2", interval(2, (11, 0), (11, 30))),
            booking("B3", "S1", "C3", interval(2, (11, 30), (12, 0))),
        ],
    );
    let candidate = PlacementCandidate::new(staff("S1"), interval(2, (10, 45), (11, 45)));
    let (result, bookings) = harness.service.plan_with_conflicts(&candidate).await.unwrap();
    assert_eq!(
        result.conflicting_bookings,
        vec![BookingId::from("B1"), BookingId::from("B2"), BookingId::from("B3")]
    );
    let ids: Vec<_> = bookings.iter().map(|booking| booking.id.clone()).collect();
    assert_eq!(ids, result.conflicting_bookings);
}

#[tokio::test]
async fn bookable_windows_around_b1() {
    let harness = Harness::reference();
    let windows = harness.service.bookable_windows(&staff("S1"), march(2)).await.unwrap();
    assert_eq!(windows, vec![interval(2, (9, 0), (10, 0)), interval(2, (11, 0), (17, 0))]);

    let weekend = harness.service.bookable_windows(&staff("S1"), march(7)).await.unwrap();
    assert!(weekend.is_empty());
}

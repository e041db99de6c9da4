//! In-memory booking store
//!
//! Implements every core port over one `RwLock`-protected state. Reads
//! return clones so callers plan against a stable snapshot; the commit
//! re-validates under the write lock, which makes the overlap check and
//! the write one atomic step.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use slotwise_core::ports::{
    BookingCommitter, BookingRepository, CommitRequest, CustomerDirectory, TimeOffRepository,
    WorkingHoursRepository,
};
use slotwise_core::{find_conflicts, BusinessZone};
use slotwise_domain::{
    Booking, BookingFilter, BookingId, CustomerId, DateRange, PlacementCandidate, Result,
    SlotwiseError, StaffId, TimeInterval, TimeOffRange, WorkingHoursTemplate,
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

const DEFAULT_CHANGE_CAPACITY: usize = 64;

/// A committed move, published to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingChange {
    pub before: Booking,
    pub after: Booking,
}

#[derive(Debug, Default)]
struct StoreState {
    bookings: BTreeMap<BookingId, Booking>,
    working_hours: HashMap<StaffId, WorkingHoursTemplate>,
    time_off: Vec<TimeOffRange>,
    customers: HashMap<CustomerId, String>,
}

/// Thread-safe in-memory store
pub struct InMemoryBookingStore {
    zone: BusinessZone,
    state: RwLock<StoreState>,
    changes: broadcast::Sender<BookingChange>,
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new(BusinessZone::utc())
    }
}

impl InMemoryBookingStore {
    /// Create an empty store interpreting date ranges in `zone`
    pub fn new(zone: BusinessZone) -> Self {
        let (changes, _) = broadcast::channel(DEFAULT_CHANGE_CAPACITY);
        Self { zone, state: RwLock::new(StoreState::default()), changes }
    }

    /// Insert or replace a booking
    pub fn upsert_booking(&self, booking: Booking) {
        self.state.write().bookings.insert(booking.id.clone(), booking);
    }

    pub fn set_working_hours(&self, template: WorkingHoursTemplate) {
        self.state.write().working_hours.insert(template.staff_id.clone(), template);
    }

    pub fn add_time_off(&self, range: TimeOffRange) {
        self.state.write().time_off.push(range);
    }

    pub fn add_customer(&self, customer_id: CustomerId, name: impl Into<String>) {
        self.state.write().customers.insert(customer_id, name.into());
    }

    pub fn booking(&self, booking_id: &BookingId) -> Option<Booking> {
        self.state.read().bookings.get(booking_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receive every committed move from now on.
    ///
    /// A receiver that falls more than the channel capacity behind gets a
    /// `Lagged` error and should reload its view.
    pub fn subscribe(&self) -> broadcast::Receiver<BookingChange> {
        self.changes.subscribe()
    }

    /// Instants covered by the local dates of `range`.
    fn range_bounds(&self, range: DateRange) -> Result<TimeInterval> {
        let first = self.zone.day_bounds(range.start)?;
        let last = self.zone.day_bounds(range.end)?;
        TimeInterval::new(first.start(), last.end())
    }

    /// Overlap check and write, under one write lock.
    fn apply_commit(&self, request: CommitRequest) -> Result<(Booking, Option<BookingChange>)> {
        let mut state = self.state.write();

        let current = state.bookings.get(&request.booking_id).cloned().ok_or_else(|| {
            SlotwiseError::NotFound(format!("booking {}", request.booking_id))
        })?;

        if current.staff_id == request.new_staff_id && current.interval == request.new_interval {
            debug!(booking_id = %current.id, "move already applied");
            return Ok((current, None));
        }

        let candidate = PlacementCandidate::new(request.new_staff_id.clone(), request.new_interval)
            .excluding(current.id.clone());
        let same_staff: Vec<Booking> = state
            .bookings
            .values()
            .filter(|booking| booking.staff_id == request.new_staff_id)
            .cloned()
            .collect();

        let unseen: Vec<BookingId> = find_conflicts(&candidate, &same_staff)
            .into_iter()
            .filter(|id| !request.acknowledged_conflicts.contains(id))
            .collect();
        if !unseen.is_empty() {
            return Err(SlotwiseError::Conflict { booking_id: current.id, conflicting: unseen });
        }

        let updated = Booking {
            staff_id: request.new_staff_id,
            interval: request.new_interval,
            ..current.clone()
        };
        state.bookings.insert(updated.id.clone(), updated.clone());
        Ok((updated.clone(), Some(BookingChange { before: current, after: updated })))
    }
}

#[async_trait]
impl WorkingHoursRepository for InMemoryBookingStore {
    async fn get_working_hours(&self, staff_id: &StaffId) -> Result<WorkingHoursTemplate> {
        self.state
            .read()
            .working_hours
            .get(staff_id)
            .cloned()
            .ok_or_else(|| SlotwiseError::NotFound(format!("working hours for staff {staff_id}")))
    }
}

#[async_trait]
impl TimeOffRepository for InMemoryBookingStore {
    async fn get_time_off(
        &self,
        staff_id: &StaffId,
        date_range: DateRange,
    ) -> Result<Vec<TimeOffRange>> {
        Ok(self
            .state
            .read()
            .time_off
            .iter()
            .filter(|range| &range.staff_id == staff_id)
            .filter(|range| {
                let low = range.start_date.min(range.end_date);
                let high = range.start_date.max(range.end_date);
                low <= date_range.end && date_range.start <= high
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
    async fn get_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        let window = self.range_bounds(filter.date_range)?;
        let mut bookings: Vec<Booking> = self
            .state
            .read()
            .bookings
            .values()
            .filter(|booking| filter.matches_owner(booking))
            .filter(|booking| booking.interval.overlaps(&window))
            .cloned()
            .collect();
        bookings.sort_by(|a, b| a.interval.cmp(&b.interval).then_with(|| a.id.cmp(&b.id)));
        Ok(bookings)
    }
}

#[async_trait]
impl BookingCommitter for InMemoryBookingStore {
    async fn commit_reschedule(&self, request: CommitRequest) -> Result<Booking> {
        let booking_id = request.booking_id.clone();
        match self.apply_commit(request) {
            Ok((booking, Some(change))) => {
                info!(
                    booking_id = %booking.id,
                    staff_id = %booking.staff_id,
                    interval = %booking.interval,
                    "booking rescheduled"
                );
                // no subscribers is fine
                let _ = self.changes.send(change);
                Ok(booking)
            }
            Ok((booking, None)) => Ok(booking),
            Err(e) => {
                warn!(%booking_id, error = %e, kind = e.label(), "reschedule commit rejected");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryBookingStore {
    async fn customer_names(
        &self,
        customer_ids: &[CustomerId],
    ) -> Result<HashMap<CustomerId, String>> {
        let state = self.state.read();
        Ok(customer_ids
            .iter()
            .filter_map(|id| state.customers.get(id).map(|name| (id.clone(), name.clone())))
            .collect())
    }
}

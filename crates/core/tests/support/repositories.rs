//! Mock implementations of the core ports
//!
//! In-memory, deterministic and inspectable. The booking mock interprets
//! date ranges in UTC, matching the harness's business zone.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use slotwise_core::ports::{
    BookingCommitter, BookingRepository, CommitRequest, CustomerDirectory, TimeOffRepository,
    WorkingHoursRepository,
};
use slotwise_domain::{
    Booking, BookingFilter, CustomerId, DateRange, Result as DomainResult, SlotwiseError,
    StaffId, TimeOffRange, WorkingHoursTemplate,
};

/// Templates keyed by staff id; unknown staff yields `NotFound`.
#[derive(Default)]
pub struct MockWorkingHoursRepository {
    templates: HashMap<StaffId, WorkingHoursTemplate>,
}

impl MockWorkingHoursRepository {
    pub fn new(templates: Vec<WorkingHoursTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|template| (template.staff_id.clone(), template))
                .collect(),
        }
    }
}

#[async_trait]
impl WorkingHoursRepository for MockWorkingHoursRepository {
    async fn get_working_hours(&self, staff_id: &StaffId) -> DomainResult<WorkingHoursTemplate> {
        self.templates
            .get(staff_id)
            .cloned()
            .ok_or_else(|| SlotwiseError::NotFound(format!("working hours for {staff_id}")))
    }
}

#[derive(Default)]
pub struct MockTimeOffRepository {
    ranges: Vec<TimeOffRange>,
}

impl MockTimeOffRepository {
    pub fn new(ranges: Vec<TimeOffRange>) -> Self {
        Self { ranges }
    }
}

#[async_trait]
impl TimeOffRepository for MockTimeOffRepository {
    async fn get_time_off(
        &self,
        staff_id: &StaffId,
        date_range: DateRange,
    ) -> DomainResult<Vec<TimeOffRange>> {
        Ok(self
            .ranges
            .iter()
            .filter(|range| &range.staff_id == staff_id)
            .filter(|range| {
                let (low, high) = if range.is_reversed() {
                    (range.end_date, range.start_date)
                } else {
                    (range.start_date, range.end_date)
                };
                low <= date_range.end && date_range.start <= high
            })
            .cloned()
            .collect())
    }
}

/// Shared booking list; tests may replace bookings to simulate concurrent
/// writers.
#[derive(Default, Clone)]
pub struct MockBookingRepository {
    bookings: Arc<Mutex<Vec<Booking>>>,
    queries: Arc<Mutex<Vec<BookingFilter>>>,
}

impl MockBookingRepository {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings: Arc::new(Mutex::new(bookings)), queries: Arc::default() }
    }

    pub fn insert(&self, booking: Booking) {
        self.bookings.lock().unwrap().push(booking);
    }

    pub fn all(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    /// Every filter received so far.
    pub fn queries(&self) -> Vec<BookingFilter> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn get_bookings(&self, filter: &BookingFilter) -> DomainResult<Vec<Booking>> {
        self.queries.lock().unwrap().push(filter.clone());
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|booking| filter.matches_owner(booking))
            .filter(|booking| {
                let start = booking.interval.start().date_naive();
                let end = booking.interval.end().date_naive();
                start <= filter.date_range.end && filter.date_range.start <= end
            })
            .cloned()
            .collect())
    }
}

/// Committer answering from a script, recording every request.
///
/// With no scripted answer it applies the move to the shared booking list.
#[derive(Clone)]
pub struct MockCommitter {
    bookings: MockBookingRepository,
    scripted: Arc<Mutex<Option<SlotwiseError>>>,
    requests: Arc<Mutex<Vec<CommitRequest>>>,
}

impl MockCommitter {
    pub fn new(bookings: MockBookingRepository) -> Self {
        Self { bookings, scripted: Arc::default(), requests: Arc::default() }
    }

    /// Fail the next commit with `error`.
    pub fn reject_next(&self, error: SlotwiseError) {
        *self.scripted.lock().unwrap() = Some(error);
    }

    pub fn requests(&self) -> Vec<CommitRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingCommitter for MockCommitter {
    async fn commit_reschedule(&self, request: CommitRequest) -> DomainResult<Booking> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(error) = self.scripted.lock().unwrap().take() {
            return Err(error);
        }

        let mut bookings = self.bookings.bookings.lock().unwrap();
        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == request.booking_id)
            .ok_or_else(|| SlotwiseError::NotFound(format!("booking {}", request.booking_id)))?;
        booking.staff_id = request.new_staff_id;
        booking.interval = request.new_interval;
        Ok(booking.clone())
    }
}

#[derive(Default)]
pub struct MockCustomerDirectory {
    names: HashMap<CustomerId, String>,
    unavailable: bool,
}

impl MockCustomerDirectory {
    pub fn new(names: &[(&str, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(id, name)| (CustomerId::from(*id), (*name).to_string()))
                .collect(),
            unavailable: false,
        }
    }

    /// Directory whose every lookup fails.
    pub fn unavailable() -> Self {
        Self { names: HashMap::new(), unavailable: true }
    }
}

#[async_trait]
impl CustomerDirectory for MockCustomerDirectory {
    async fn customer_names(
        &self,
        customer_ids: &[CustomerId],
    ) -> DomainResult<HashMap<CustomerId, String>> {
        if self.unavailable {
            return Err(SlotwiseError::Persistence("directory offline".into()));
        }
        Ok(customer_ids
            .iter()
            .filter_map(|id| self.names.get(id).map(|name| (id.clone(), name.clone())))
            .collect())
    }
}

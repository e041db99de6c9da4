//! Scheduling service - assembles snapshots through the ports and runs the
//! pure planners over them

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use slotwise_domain::{
    Booking, BookingFilter, CalendarConfig, CalendarMonth, Config, DateRange, DayProjection,
    MonthProjection, PlacementCandidate, PlacementResult, Result, SlotwiseError, StaffId,
    TimeInterval, TimeOffRange, WeekProjection, WorkingHoursTemplate,
};
use tracing::{debug, warn};

use super::availability::AvailabilityResolver;
use super::conflict::conflicting_bookings;
use super::planner::{PlacementPlanner, PlanningContext};
use super::zone::BusinessZone;
use crate::calendar::CalendarAggregator;
use crate::ports::{BookingRepository, TimeOffRepository, WorkingHoursRepository};

/// Owned, mutually consistent data for one staff member and date range
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSnapshot {
    pub working_hours: WorkingHoursTemplate,
    pub time_off: Vec<TimeOffRange>,
    pub bookings: Vec<Booking>,
}

impl ScheduleSnapshot {
    pub fn context(&self) -> PlanningContext<'_> {
        PlanningContext {
            working_hours: &self.working_hours,
            time_off: &self.time_off,
            existing_bookings: &self.bookings,
        }
    }

    pub fn resolver(&self, zone: BusinessZone) -> AvailabilityResolver<'_> {
        AvailabilityResolver::new(zone, &self.working_hours, &self.time_off)
    }
}

/// Scheduling service
pub struct SchedulingService {
    working_hours: Arc<dyn WorkingHoursRepository>,
    time_off: Arc<dyn TimeOffRepository>,
    bookings: Arc<dyn BookingRepository>,
    planner: PlacementPlanner,
    calendar: CalendarAggregator,
}

impl SchedulingService {
    /// Create a service with default calendar geometry
    pub fn new(
        working_hours: Arc<dyn WorkingHoursRepository>,
        time_off: Arc<dyn TimeOffRepository>,
        bookings: Arc<dyn BookingRepository>,
        zone: BusinessZone,
    ) -> Self {
        Self {
            working_hours,
            time_off,
            bookings,
            planner: PlacementPlanner::new(zone),
            calendar: CalendarAggregator::new(zone, &CalendarConfig::default()),
        }
    }

    /// Create a service from application configuration
    ///
    /// # Errors
    /// Returns `SlotwiseError::Config` for an unknown business time zone.
    pub fn from_config(
        config: &Config,
        working_hours: Arc<dyn WorkingHoursRepository>,
        time_off: Arc<dyn TimeOffRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Result<Self> {
        let zone = BusinessZone::from_name(&config.business.timezone)?;
        Ok(Self::new(working_hours, time_off, bookings, zone).with_calendar(&config.calendar))
    }

    pub fn with_calendar(mut self, config: &CalendarConfig) -> Self {
        self.calendar = CalendarAggregator::new(self.zone(), config);
        self
    }

    pub fn zone(&self) -> BusinessZone {
        self.planner.zone()
    }

    pub fn calendar(&self) -> &CalendarAggregator {
        &self.calendar
    }

    /// Fetch working hours, time off and bookings of `staff_id` for `dates`.
    ///
    /// Bookings are fetched from the day before `dates.start` so that one
    /// running over midnight is still seen. A staff member without a
    /// template gets an empty one, which makes every time unavailable.
    pub async fn load_snapshot(
        &self,
        staff_id: &StaffId,
        dates: DateRange,
    ) -> Result<ScheduleSnapshot> {
        let working_hours = match self.working_hours.get_working_hours(staff_id).await {
            Ok(template) => template,
            Err(SlotwiseError::NotFound(_)) => {
                warn!(%staff_id, "no working hours on record; treating as unavailable");
                WorkingHoursTemplate::new(staff_id.clone(), Vec::new())
            }
            Err(e) => return Err(e),
        };

        let time_off = self.time_off.get_time_off(staff_id, dates).await?;
        for range in time_off.iter().filter(|range| range.is_reversed()) {
            warn!(
                %staff_id,
                time_off_id = %range.id,
                start_date = %range.start_date,
                end_date = %range.end_date,
                "time-off range ends before it starts; blocking the dates between"
            );
        }

        let widened = DateRange::new(dates.start.pred_opt().unwrap_or(dates.start), dates.end)?;
        let filter = BookingFilter::for_range(widened).with_staff(vec![staff_id.clone()]);
        let bookings = self.bookings.get_bookings(&filter).await?;

        debug!(
            %staff_id,
            start = %dates.start,
            end = %dates.end,
            time_off = time_off.len(),
            bookings = bookings.len(),
            "schedule snapshot loaded"
        );
        Ok(ScheduleSnapshot { working_hours, time_off, bookings })
    }

    /// Plan `candidate` against freshly loaded data.
    pub async fn plan_placement(&self, candidate: &PlacementCandidate) -> Result<PlacementResult> {
        let dates = self.dates_of(&candidate.interval)?;
        let snapshot = self.load_snapshot(&candidate.staff_id, dates).await?;
        Ok(self.planner.plan(candidate, snapshot.context()))
    }

    /// Like [`Self::plan_placement`], also returning the conflicting
    /// bookings themselves in the order of the result's ids.
    pub async fn plan_with_conflicts(
        &self,
        candidate: &PlacementCandidate,
    ) -> Result<(PlacementResult, Vec<Booking>)> {
        let dates = self.dates_of(&candidate.interval)?;
        let snapshot = self.load_snapshot(&candidate.staff_id, dates).await?;
        let result = self.planner.plan(candidate, snapshot.context());
        let conflicting = if result.requires_override() {
            conflicting_bookings(candidate, &snapshot.bookings).into_iter().cloned().collect()
        } else {
            Vec::new()
        };
        Ok((result, conflicting))
    }

    pub async fn is_within_working_hours(
        &self,
        staff_id: &StaffId,
        instant: DateTime<Utc>,
    ) -> Result<bool> {
        let template = self.working_hours.get_working_hours(staff_id).await;
        match template {
            Ok(template) => Ok(AvailabilityResolver::new(self.zone(), &template, &[])
                .is_within_working_hours(instant)),
            Err(SlotwiseError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn is_on_time_off(&self, staff_id: &StaffId, date: NaiveDate) -> Result<bool> {
        let time_off = self.time_off.get_time_off(staff_id, DateRange::single(date)).await?;
        let template = WorkingHoursTemplate::new(staff_id.clone(), Vec::new());
        Ok(AvailabilityResolver::new(self.zone(), &template, &time_off).is_on_time_off(date))
    }

    /// Free parts of the working day of `staff_id` on `date`.
    pub async fn bookable_windows(
        &self,
        staff_id: &StaffId,
        date: NaiveDate,
    ) -> Result<Vec<TimeInterval>> {
        let snapshot = self.load_snapshot(staff_id, DateRange::single(date)).await?;
        Ok(snapshot.resolver(self.zone()).bookable_windows(date, &snapshot.bookings))
    }

    pub async fn day_view(&self, staff_id: &StaffId, date: NaiveDate) -> Result<DayProjection> {
        let filter = BookingFilter::for_range(DateRange::single(date))
            .with_staff(vec![staff_id.clone()]);
        let bookings = self.bookings.get_bookings(&filter).await?;
        Ok(self.calendar.project_day(staff_id, date, &bookings))
    }

    /// Week containing `date`, for the selected staff members.
    pub async fn week_view(
        &self,
        staff_ids: &[StaffId],
        date: NaiveDate,
    ) -> Result<WeekProjection> {
        let week_start = self.calendar.week_start_for(date);
        if staff_ids.is_empty() {
            return Ok(self.calendar.project_week(staff_ids, week_start, &[]));
        }
        let dates = DateRange::new(week_start, week_start + Duration::days(6))?;
        let filter = BookingFilter::for_range(dates).with_staff(staff_ids.to_vec());
        let bookings = self.bookings.get_bookings(&filter).await?;
        Ok(self.calendar.project_week(staff_ids, week_start, &bookings))
    }

    /// Month summary, optionally restricted to some staff members.
    pub async fn month_view(
        &self,
        month: CalendarMonth,
        staff_ids: Option<Vec<StaffId>>,
    ) -> Result<MonthProjection> {
        let mut filter = BookingFilter::for_range(month.date_range()?);
        filter.staff_ids = staff_ids;
        let bookings = self.bookings.get_bookings(&filter).await?;
        self.calendar.project_month(month, &bookings)
    }

    fn dates_of(&self, interval: &TimeInterval) -> Result<DateRange> {
        let zone = self.zone();
        let start = zone.date_of(interval.start());
        let end = zone.date_of(interval.end()).max(start);
        DateRange::new(start, end)
    }
}

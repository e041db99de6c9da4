//! Reschedule workflow driver - runs the engine calls and the commit for
//! one drag-and-drop gesture

use std::sync::Arc;

use slotwise_domain::{Booking, CustomerId, RescheduleConfig, Result, SlotwiseError};
use tracing::{debug, info, warn};

use super::snap::{DropTarget, Snapper};
use super::state::{transition, ConflictDetail, ReschedulePhase, RescheduleEvent, RescheduleState};
use crate::ports::{BookingCommitter, CommitRequest, CustomerDirectory};
use crate::scheduling::SchedulingService;

/// Reschedule workflow
///
/// Owns the state of a single gesture. Every step is validated by
/// [`transition`]; a rejected step leaves the state untouched.
pub struct RescheduleWorkflow {
    scheduling: Arc<SchedulingService>,
    committer: Arc<dyn BookingCommitter>,
    customers: Arc<dyn CustomerDirectory>,
    snapper: Snapper,
    state: RescheduleState,
    last_error: Option<SlotwiseError>,
}

impl RescheduleWorkflow {
    pub fn new(
        scheduling: Arc<SchedulingService>,
        committer: Arc<dyn BookingCommitter>,
        customers: Arc<dyn CustomerDirectory>,
    ) -> Self {
        Self {
            scheduling,
            committer,
            customers,
            snapper: Snapper::default(),
            state: RescheduleState::Idle,
            last_error: None,
        }
    }

    pub fn with_config(mut self, config: &RescheduleConfig) -> Self {
        self.snapper = Snapper::from_config(config);
        self
    }

    pub fn state(&self) -> &RescheduleState {
        &self.state
    }

    pub fn phase(&self) -> ReschedulePhase {
        self.state.phase()
    }

    /// Error of the last rejected commit or failed planning call, cleared
    /// when a new drag begins.
    pub fn last_error(&self) -> Option<&SlotwiseError> {
        self.last_error.as_ref()
    }

    fn apply(&mut self, event: RescheduleEvent) -> Result<&RescheduleState> {
        let next = transition(&self.state, event)?;
        debug!(from = %self.state.phase(), to = %next.phase(), "reschedule transition");
        self.state = next;
        Ok(&self.state)
    }

    /// Pick up `booking`. No engine call is made.
    pub fn begin_drag(&mut self, booking: Booking) -> Result<&RescheduleState> {
        self.apply(RescheduleEvent::BeginDrag(booking))?;
        self.last_error = None;
        Ok(&self.state)
    }

    /// Release the dragged booking over `target` and plan the move.
    ///
    /// Ends in `Confirming` whatever the outcome; on a conflict the state
    /// lists the conflicting bookings with their customers' names. If
    /// planning fails the gesture goes back to `Dragging`.
    pub async fn drop(&mut self, target: DropTarget) -> Result<&RescheduleState> {
        let RescheduleState::Dragging { booking } = &self.state else {
            return Err(SlotwiseError::InvalidTransition(format!(
                "cannot drop while {}",
                self.state.phase()
            )));
        };
        let booking = booking.clone();
        let candidate = self.snapper.candidate_for(self.scheduling.zone(), &booking, &target)?;
        self.apply(RescheduleEvent::Drop(candidate.clone()))?;

        let (result, conflicting) = match self.scheduling.plan_with_conflicts(&candidate).await {
            Ok(planned) => planned,
            Err(e) => {
                warn!(booking_id = %booking.id, error = %e, "planning the drop failed");
                self.state = RescheduleState::Dragging { booking };
                self.last_error = Some(e.clone());
                return Err(e);
            }
        };

        let conflicts = self.describe_conflicts(&conflicting).await;
        info!(
            booking_id = %booking.id,
            staff_id = %candidate.staff_id,
            interval = %candidate.interval,
            outcome = %result.outcome,
            conflicts = conflicts.len(),
            "reschedule planned"
        );
        self.apply(RescheduleEvent::Planned { result, conflicts })
    }

    /// Customer names are display-only; a failing directory leaves them out.
    async fn describe_conflicts(&self, conflicting: &[Booking]) -> Vec<ConflictDetail> {
        if conflicting.is_empty() {
            return Vec::new();
        }
        let mut customer_ids: Vec<CustomerId> =
            conflicting.iter().map(|booking| booking.customer_id.clone()).collect();
        customer_ids.sort();
        customer_ids.dedup();

        let names = match self.customers.customer_names(&customer_ids).await {
            Ok(names) => names,
            Err(e) => {
                warn!(error = %e, "customer names unavailable for conflict warning");
                Default::default()
            }
        };

        conflicting
            .iter()
            .map(|booking| ConflictDetail {
                booking_id: booking.id.clone(),
                customer_id: booking.customer_id.clone(),
                customer_name: names.get(&booking.customer_id).cloned(),
                interval: booking.interval,
            })
            .collect()
    }

    /// Commit the move shown in the confirmation step.
    ///
    /// A rejection returns the workflow to `Idle` with the error kept in
    /// [`Self::last_error`]; it is not retried.
    pub async fn confirm(&mut self) -> Result<Booking> {
        let RescheduleState::Confirming { booking, candidate, result, .. } = &self.state else {
            return Err(SlotwiseError::InvalidTransition(format!(
                "cannot confirm while {}",
                self.state.phase()
            )));
        };
        let request = CommitRequest {
            booking_id: booking.id.clone(),
            new_staff_id: candidate.staff_id.clone(),
            new_interval: candidate.interval,
            acknowledged_conflicts: result.conflicting_bookings.clone(),
        };

        match self.committer.commit_reschedule(request).await {
            Ok(updated) => {
                info!(
                    booking_id = %updated.id,
                    staff_id = %updated.staff_id,
                    interval = %updated.interval,
                    "reschedule committed"
                );
                self.apply(RescheduleEvent::CommitSucceeded(updated.clone()))?;
                Ok(updated)
            }
            Err(e) => {
                warn!(
                    booking_id = %booking.id,
                    error = %e,
                    kind = e.label(),
                    "reschedule rejected"
                );
                self.apply(RescheduleEvent::CommitRejected)?;
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Decline the confirmation, or abandon a gesture still in progress.
    pub fn cancel(&mut self) -> Result<&RescheduleState> {
        let event = match self.state.phase() {
            ReschedulePhase::Confirming => RescheduleEvent::Decline,
            _ => RescheduleEvent::Abandon,
        };
        self.apply(event)
    }

    /// Return to `Idle` once the view has reloaded after a finished gesture.
    pub fn reload(&mut self) -> Result<&RescheduleState> {
        self.apply(RescheduleEvent::Reload)
    }
}

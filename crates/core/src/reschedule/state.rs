//! Reschedule state machine
//!
//! `transition` is pure: it only decides which state follows which event.
//! Engine calls and the commit are made by
//! [`RescheduleWorkflow`](super::workflow::RescheduleWorkflow), which feeds
//! their results back in as events.

use serde::{Deserialize, Serialize};
use slotwise_domain::{
    Booking, BookingId, CustomerId, PlacementCandidate, PlacementOutcome, PlacementResult, Result,
    SlotwiseError, TimeInterval,
};

/// A conflicting booking as shown in the confirmation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictDetail {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    /// `None` when the directory does not know the customer
    pub customer_name: Option<String>,
    pub interval: TimeInterval,
}

/// Where a reschedule gesture currently is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RescheduleState {
    #[default]
    Idle,
    Dragging {
        booking: Booking,
    },
    DropPending {
        booking: Booking,
        candidate: PlacementCandidate,
    },
    Confirming {
        booking: Booking,
        candidate: PlacementCandidate,
        result: PlacementResult,
        conflicts: Vec<ConflictDetail>,
    },
    /// Holds the booking as stored after the move
    Committed {
        booking: Booking,
    },
    /// Holds the untouched booking, snapped back to its old slot
    Cancelled {
        booking: Booking,
    },
}

/// Discriminant of [`RescheduleState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReschedulePhase {
    Idle,
    Dragging,
    DropPending,
    Confirming,
    Committed,
    Cancelled,
}

slotwise_domain::impl_domain_status_conversions!(ReschedulePhase {
    Idle => "idle",
    Dragging => "dragging",
    DropPending => "drop_pending",
    Confirming => "confirming",
    Committed => "committed",
    Cancelled => "cancelled",
});

impl RescheduleState {
    pub fn phase(&self) -> ReschedulePhase {
        match self {
            Self::Idle => ReschedulePhase::Idle,
            Self::Dragging { .. } => ReschedulePhase::Dragging,
            Self::DropPending { .. } => ReschedulePhase::DropPending,
            Self::Confirming { .. } => ReschedulePhase::Confirming,
            Self::Committed { .. } => ReschedulePhase::Committed,
            Self::Cancelled { .. } => ReschedulePhase::Cancelled,
        }
    }

    /// The booking the gesture is about, if any.
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            Self::Idle => None,
            Self::Dragging { booking }
            | Self::DropPending { booking, .. }
            | Self::Confirming { booking, .. }
            | Self::Committed { booking }
            | Self::Cancelled { booking } => Some(booking),
        }
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum RescheduleEvent {
    BeginDrag(Booking),
    Drop(PlacementCandidate),
    Planned { result: PlacementResult, conflicts: Vec<ConflictDetail> },
    CommitSucceeded(Booking),
    CommitRejected,
    Decline,
    /// Gesture dropped before anything was committed
    Abandon,
    /// The view reloaded after a finished gesture
    Reload,
}

impl RescheduleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeginDrag(_) => "begin_drag",
            Self::Drop(_) => "drop",
            Self::Planned { .. } => "planned",
            Self::CommitSucceeded(_) => "commit_succeeded",
            Self::CommitRejected => "commit_rejected",
            Self::Decline => "decline",
            Self::Abandon => "abandon",
            Self::Reload => "reload",
        }
    }
}

/// Compute the state following `event`.
///
/// # Errors
/// Returns `SlotwiseError::InvalidTransition` when `event` is not accepted
/// in `state`, or when a drop or commit refers to another booking than the
/// one being dragged.
pub fn transition(state: &RescheduleState, event: RescheduleEvent) -> Result<RescheduleState> {
    use RescheduleEvent as E;
    use RescheduleState as S;

    match (state, event) {
        (S::Idle, E::BeginDrag(booking)) => Ok(S::Dragging { booking }),

        (S::Dragging { booking }, E::Drop(candidate)) => {
            if candidate.exclude_booking_id.as_ref() != Some(&booking.id) {
                return Err(SlotwiseError::InvalidTransition(format!(
                    "drop candidate must exclude dragged booking {}",
                    booking.id
                )));
            }
            Ok(S::DropPending { booking: booking.clone(), candidate })
        }

        (S::DropPending { booking, candidate }, E::Planned { result, conflicts }) => {
            let conflicts =
                if result.outcome == PlacementOutcome::Conflict { conflicts } else { Vec::new() };
            Ok(S::Confirming {
                booking: booking.clone(),
                candidate: candidate.clone(),
                result,
                conflicts,
            })
        }

        (S::Confirming { booking, .. }, E::CommitSucceeded(updated)) => {
            if updated.id != booking.id {
                return Err(SlotwiseError::InvalidTransition(format!(
                    "commit returned booking {} while confirming {}",
                    updated.id, booking.id
                )));
            }
            Ok(S::Committed { booking: updated })
        }
        (S::Confirming { .. }, E::CommitRejected) => Ok(S::Idle),
        (S::Confirming { booking, .. }, E::Decline) => {
            Ok(S::Cancelled { booking: booking.clone() })
        }

        (S::Dragging { .. } | S::DropPending { .. } | S::Confirming { .. }, E::Abandon) => {
            Ok(S::Idle)
        }

        (S::Committed { .. } | S::Cancelled { .. }, E::Reload) => Ok(S::Idle),

        (state, event) => Err(SlotwiseError::InvalidTransition(format!(
            "cannot {} while {}",
            event.name(),
            state.phase()
        ))),
    }
}

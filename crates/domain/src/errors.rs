//! Error types used throughout the scheduling engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::BookingId;

/// Main error type for Slotwise
///
/// Placement outcomes (time-off, outside working hours, conflicts found while
/// planning) are *not* errors; they are modelled by
/// [`PlacementResult`](crate::PlacementResult). The variants here cover
/// rejected input, rejected commits and collaborator failures.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SlotwiseError {
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// A commit was rejected because the slot is now occupied.
    #[error("Booking {booking_id} conflicts with {} other booking(s); this slot was just taken, please pick another time", conflicting.len())]
    Conflict { booking_id: BookingId, conflicting: Vec<BookingId> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SlotwiseError {
    /// Whether the failed operation may succeed when attempted again
    /// unchanged.
    ///
    /// A conflict never is: the user has to pick another time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidInterval(_) => "invalid_interval",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidTransition(_) => "invalid_transition",
            Self::Conflict { .. } => "conflict",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Persistence(_) => "persistence",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Slotwise operations
pub type Result<T> = std::result::Result<T, SlotwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_mentions_count() {
        let err = SlotwiseError::Conflict {
            booking_id: BookingId::from("b-1"),
            conflicting: vec![BookingId::from("b-2"), BookingId::from("b-3")],
        };
        let message = err.to_string();
        assert!(message.contains("b-1"));
        assert!(message.contains("2 other booking(s)"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn only_persistence_failures_are_retryable() {
        assert!(SlotwiseError::Persistence("timeout".into()).is_retryable());
        assert!(!SlotwiseError::InvalidInterval("empty".into()).is_retryable());
        assert!(!SlotwiseError::Internal("bug".into()).is_retryable());
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = SlotwiseError::NotFound("booking b-9".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "booking b-9");
        assert_eq!(err.label(), "not_found");
    }
}

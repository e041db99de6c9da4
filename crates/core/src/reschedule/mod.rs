//! Drag-and-drop rescheduling
//!
//! `state` holds the pure state machine, `snap` converts drop positions to
//! candidates and `workflow` drives both against the scheduling service and
//! the commit port.

pub mod snap;
pub mod state;
pub mod workflow;

pub use snap::{DropTarget, Snapper};
pub use state::{transition, ConflictDetail, ReschedulePhase, RescheduleEvent, RescheduleState};
pub use workflow::RescheduleWorkflow;

//! # Slotwise Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - Tracing subscriber setup
//! - An in-memory booking store with commit-time re-validation and a change
//!   feed
//!
//! ## Architecture
//! - Implements traits defined in `slotwise-core`
//! - Depends on `slotwise-domain` and `slotwise-core`
//! - Contains all "impure" code (I/O, global state, locking)

pub mod config;
pub mod observability;
pub mod store;

// Re-export commonly used items
pub use observability::init_tracing;
pub use store::{BookingChange, InMemoryBookingStore};

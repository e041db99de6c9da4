//! Booking storage adapters

pub mod memory;

pub use memory::{BookingChange, InMemoryBookingStore};

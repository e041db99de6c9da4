//! Observability infrastructure
//!
//! Structured logging through `tracing`. The subscriber is installed once
//! per process from [`LoggingConfig`](slotwise_domain::LoggingConfig);
//! `RUST_LOG` overrides the configured level when set.

pub mod logging;

pub use logging::{build_filter, init_tracing};

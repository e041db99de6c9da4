//! Scheduling constants
//!
//! Defaults for the presentation-level knobs. Every value here can be
//! overridden through [`Config`](crate::Config).

// Display window of the day and week views (local hours)
pub const DEFAULT_DISPLAY_START_HOUR: u32 = 8;
pub const DEFAULT_DISPLAY_END_HOUR: u32 = 20;

// Card geometry, in pixels per hour / pixels
pub const DEFAULT_SLOT_HEIGHT: f64 = 60.0;
pub const DEFAULT_MIN_CARD_HEIGHT: f64 = 24.0;

// Drag-and-drop snapping
pub const DEFAULT_SNAP_MINUTES: u32 = 30;
pub const DEFAULT_CELL_HEIGHT: f64 = 60.0;

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DAYS_PER_WEEK: usize = 7;
pub const MINUTES_PER_HOUR: u32 = 60;

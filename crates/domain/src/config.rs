//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CELL_HEIGHT, DEFAULT_DISPLAY_END_HOUR, DEFAULT_DISPLAY_START_HOUR, DEFAULT_LOG_LEVEL,
    DEFAULT_MIN_CARD_HEIGHT, DEFAULT_SLOT_HEIGHT, DEFAULT_SNAP_MINUTES, DEFAULT_TIMEZONE,
    MINUTES_PER_HOUR,
};
use crate::errors::{Result, SlotwiseError};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub reschedule: RescheduleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Business-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    /// IANA time zone used to interpret working hours and calendar dates
    pub timezone: String,
}

/// First column of the week view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

crate::impl_domain_status_conversions!(WeekStart {
    Monday => "monday",
    Sunday => "sunday",
});

/// Day/week view geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub display_start_hour: u32,
    pub display_end_hour: u32,
    /// Pixels per hour
    pub slot_height: f64,
    /// Floor keeping very short bookings clickable
    pub min_card_height: f64,
    pub week_starts_on: WeekStart,
}

/// Drag-and-drop behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RescheduleConfig {
    /// Granularity a dropped start minute snaps to
    pub snap_minutes: u32,
    /// Height of one hour cell in the drop grid
    pub cell_height: f64,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

crate::impl_domain_status_conversions!(LogFormat {
    Pretty => "pretty",
    Compact => "compact",
    Json => "json",
});

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `slotwise_core=debug`
    pub level: String,
    pub format: LogFormat,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self { timezone: DEFAULT_TIMEZONE.to_string() }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            display_start_hour: DEFAULT_DISPLAY_START_HOUR,
            display_end_hour: DEFAULT_DISPLAY_END_HOUR,
            slot_height: DEFAULT_SLOT_HEIGHT,
            min_card_height: DEFAULT_MIN_CARD_HEIGHT,
            week_starts_on: WeekStart::Monday,
        }
    }
}

impl Default for RescheduleConfig {
    fn default() -> Self {
        Self { snap_minutes: DEFAULT_SNAP_MINUTES, cell_height: DEFAULT_CELL_HEIGHT }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), format: LogFormat::Compact }
    }
}

impl CalendarConfig {
    /// # Errors
    /// Returns `SlotwiseError::Config` for an empty or out-of-range display
    /// window or non-positive heights.
    pub fn validate(&self) -> Result<()> {
        if self.display_start_hour >= self.display_end_hour || self.display_end_hour > 24 {
            return Err(SlotwiseError::Config(format!(
                "display window {}:00-{}:00 is empty or exceeds the day",
                self.display_start_hour, self.display_end_hour
            )));
        }
        if !(self.slot_height > 0.0) || !(self.min_card_height >= 0.0) {
            return Err(SlotwiseError::Config(format!(
                "slot height {} and minimum card height {} must be positive",
                self.slot_height, self.min_card_height
            )));
        }
        Ok(())
    }
}

impl RescheduleConfig {
    /// # Errors
    /// Returns `SlotwiseError::Config` when the snap does not divide an hour
    /// or the cell height is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.snap_minutes == 0 || MINUTES_PER_HOUR % self.snap_minutes != 0 {
            return Err(SlotwiseError::Config(format!(
                "snap of {} minutes must divide an hour",
                self.snap_minutes
            )));
        }
        if !(self.cell_height > 0.0) {
            return Err(SlotwiseError::Config(format!(
                "cell height {} must be positive",
                self.cell_height
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Validate every section that can be checked without a time-zone
    /// database.
    ///
    /// # Errors
    /// Returns the first `SlotwiseError::Config` found.
    pub fn validate(&self) -> Result<()> {
        if self.business.timezone.trim().is_empty() {
            return Err(SlotwiseError::Config("business timezone must not be empty".into()));
        }
        self.calendar.validate()?;
        self.reschedule.validate()
    }
}

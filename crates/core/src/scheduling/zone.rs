//! Business time zone
//!
//! Bookings are absolute UTC instants while working hours are local
//! times-of-day. Every conversion between the two goes through
//! [`BusinessZone`] so the whole engine agrees on one interpretation.

use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use slotwise_domain::{Result, SlotwiseError, TimeInterval};

/// The business's configured IANA time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessZone {
    tz: Tz,
}

impl Default for BusinessZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl BusinessZone {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// Resolve an IANA name such as `Europe/Berlin`.
    ///
    /// # Errors
    /// Returns `SlotwiseError::Config` for unknown zone names.
    pub fn from_name(name: &str) -> Result<Self> {
        Tz::from_str(name.trim())
            .map(Self::new)
            .map_err(|e| SlotwiseError::Config(format!("Unknown time zone '{name}': {e}")))
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date_naive()
    }

    pub fn weekday_of(&self, instant: DateTime<Utc>) -> Weekday {
        self.local(instant).weekday()
    }

    pub fn time_of(&self, instant: DateTime<Utc>) -> NaiveTime {
        self.local(instant).time()
    }

    /// Convert a local wall-clock reading to an instant.
    ///
    /// Ambiguous readings (clocks falling back) resolve to the earlier
    /// instant. Readings inside a spring-forward gap are read with the
    /// offset in force before the gap, which moves them forward by the
    /// length of the gap.
    pub fn local_to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        match self.tz.from_local_datetime(&local) {
            LocalResult::Single(resolved) | LocalResult::Ambiguous(resolved, _) => {
                resolved.with_timezone(&Utc)
            }
            LocalResult::None => {
                let offset =
                    self.tz.offset_from_utc_datetime(&(local - Duration::days(1))).fix();
                let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
                Utc.from_utc_datetime(&utc)
            }
        }
    }

    pub fn to_instant(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        self.local_to_utc(date.and_time(time))
    }

    /// Local midnight of `date` up to the next local midnight.
    ///
    /// # Errors
    /// Returns `SlotwiseError::InvalidInput` for the last representable date.
    pub fn day_bounds(&self, date: NaiveDate) -> Result<TimeInterval> {
        let next = date
            .succ_opt()
            .ok_or_else(|| SlotwiseError::InvalidInput(format!("no day follows {date}")))?;
        TimeInterval::new(
            self.to_instant(date, NaiveTime::MIN),
            self.to_instant(next, NaiveTime::MIN),
        )
    }
}

//! Staff availability inputs: weekly working hours and time off

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::ids::{StaffId, TimeOffId};

/// Day-of-week index used by working-hours templates (Sunday = 0).
pub fn day_of_week_index(weekday: Weekday) -> u8 {
    // num_days_from_sunday is always in 0..=6
    weekday.num_days_from_sunday() as u8
}

/// One day of a staff member's recurring weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WorkingHoursEntry {
    /// 0–6, Sunday = 0
    pub day_of_week: u8,
    /// Local opening time in the business time zone
    pub start_time: NaiveTime,
    /// Local closing time (exclusive)
    pub end_time: NaiveTime,
    #[serde(default)]
    pub is_off: bool,
}

impl WorkingHoursEntry {
    pub fn working(day_of_week: u8, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self { day_of_week, start_time, end_time, is_off: false }
    }

    pub fn off(day_of_week: u8) -> Self {
        Self { day_of_week, start_time: NaiveTime::MIN, end_time: NaiveTime::MIN, is_off: true }
    }

    /// Opening and closing time, or `None` for a day off or a malformed
    /// entry (`start_time >= end_time`).
    pub fn window(&self) -> Option<(NaiveTime, NaiveTime)> {
        (!self.is_off && self.start_time < self.end_time)
            .then_some((self.start_time, self.end_time))
    }
}

/// Read-only snapshot of a staff member's weekly working hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WorkingHoursTemplate {
    pub staff_id: StaffId,
    #[serde(default)]
    pub entries: Vec<WorkingHoursEntry>,
}

/// What a template says about one day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySchedule {
    Working { start: NaiveTime, end: NaiveTime },
    Off,
    /// No entry for the day
    Unspecified,
    /// Several entries for the day, or an entry with `start >= end`
    Malformed,
}

impl DaySchedule {
    pub fn window(self) -> Option<(NaiveTime, NaiveTime)> {
        match self {
            Self::Working { start, end } => Some((start, end)),
            Self::Off | Self::Unspecified | Self::Malformed => None,
        }
    }
}

impl WorkingHoursTemplate {
    pub fn new(staff_id: StaffId, entries: Vec<WorkingHoursEntry>) -> Self {
        Self { staff_id, entries }
    }

    /// Same opening hours on each of `days`; every other day is left
    /// unspecified.
    pub fn uniform(staff_id: StaffId, days: &[Weekday], start: NaiveTime, end: NaiveTime) -> Self {
        let entries = days
            .iter()
            .map(|day| WorkingHoursEntry::working(day_of_week_index(*day), start, end))
            .collect();
        Self { staff_id, entries }
    }

    /// Resolve the schedule for one weekday.
    pub fn schedule_for(&self, weekday: Weekday) -> DaySchedule {
        let index = day_of_week_index(weekday);
        let mut matching = self.entries.iter().filter(|entry| entry.day_of_week == index);

        let Some(entry) = matching.next() else {
            return DaySchedule::Unspecified;
        };
        if matching.next().is_some() {
            return DaySchedule::Malformed;
        }
        if entry.is_off {
            return DaySchedule::Off;
        }
        entry.window().map_or(DaySchedule::Malformed, |(start, end)| DaySchedule::Working {
            start,
            end,
        })
    }
}

/// Inclusive multi-day block during which a staff member is unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimeOffRange {
    pub id: TimeOffId,
    pub staff_id: StaffId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TimeOffRange {
    pub fn new(
        id: TimeOffId,
        staff_id: StaffId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self { id, staff_id, start_date, end_date, reason: None }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// `end_date < start_date`
    pub fn is_reversed(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Whether the whole of `date` is blocked.
    ///
    /// A reversed range blocks every date between its two endpoints.
    pub fn covers(&self, date: NaiveDate) -> bool {
        let (first, last) = if self.is_reversed() {
            (self.end_date, self.start_date)
        } else {
            (self.start_date, self.end_date)
        };
        first <= date && date <= last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn sunday_is_zero() {
        assert_eq!(day_of_week_index(Weekday::Sun), 0);
        assert_eq!(day_of_week_index(Weekday::Mon), 1);
        assert_eq!(day_of_week_index(Weekday::Sat), 6);
    }

    #[test]
    fn schedule_resolution() {
        let staff = StaffId::from("S1");
        let template = WorkingHoursTemplate::new(
            staff,
            vec![
                WorkingHoursEntry::working(1, time(9, 0), time(17, 0)),
                WorkingHoursEntry::off(0),
                WorkingHoursEntry::working(2, time(12, 0), time(9, 0)),
                WorkingHoursEntry::working(3, time(9, 0), time(12, 0)),
                WorkingHoursEntry::working(3, time(13, 0), time(17, 0)),
            ],
        );

        assert_eq!(
            template.schedule_for(Weekday::Mon),
            DaySchedule::Working { start: time(9, 0), end: time(17, 0) }
        );
        assert_eq!(template.schedule_for(Weekday::Sun), DaySchedule::Off);
        assert_eq!(template.schedule_for(Weekday::Tue), DaySchedule::Malformed);
        assert_eq!(template.schedule_for(Weekday::Wed), DaySchedule::Malformed);
        assert_eq!(template.schedule_for(Weekday::Fri), DaySchedule::Unspecified);
        assert!(template.schedule_for(Weekday::Fri).window().is_none());
    }

    #[test]
    fn time_off_is_inclusive_on_both_ends() {
        let range = TimeOffRange::new(TimeOffId::from("T1"), StaffId::from("S1"), date(1), date(5))
            .with_reason("vacation");
        assert!(range.covers(date(1)));
        assert!(range.covers(date(3)));
        assert!(range.covers(date(5)));
        assert!(!range.covers(date(6)));
        assert_eq!(range.reason.as_deref(), Some("vacation"));
    }

    #[test]
    fn reversed_time_off_blocks_between_endpoints() {
        let range = TimeOffRange::new(TimeOffId::from("T2"), StaffId::from("S1"), date(9), date(7));
        assert!(range.is_reversed());
        assert!(range.covers(date(8)));
        assert!(!range.covers(date(10)));
    }
}

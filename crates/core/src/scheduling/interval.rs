//! Interval set operations
//!
//! Pairwise predicates (`overlaps`, `contains`) live on
//! [`TimeInterval`] itself; this module adds the operations over *sets* of
//! intervals the availability surface is built from. Every function returns
//! intervals sorted by start and pairwise disjoint.

use chrono::{DateTime, Duration, Utc};
use slotwise_domain::TimeInterval;

/// `true` iff `a` and `b` share at least one instant.
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.overlaps(b)
}

/// `true` iff `interval.start <= instant < interval.end`.
pub fn contains(interval: &TimeInterval, instant: DateTime<Utc>) -> bool {
    interval.contains(instant)
}

/// Length of the shared part of `a` and `b`.
pub fn overlap_duration(a: &TimeInterval, b: &TimeInterval) -> Duration {
    a.intersection(b).map_or_else(Duration::zero, |shared| shared.duration())
}

/// Sort and coalesce overlapping or touching intervals.
pub fn merge_overlapping(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start() <= last.end() => {
                if interval.end() > last.end() {
                    // start < end holds: last.start < last.end < interval.end
                    if let Ok(extended) = TimeInterval::new(last.start(), interval.end()) {
                        *last = extended;
                    }
                }
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Parts of `base` not covered by any of `holes`.
pub fn subtract(base: &TimeInterval, holes: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut remaining = Vec::new();
    let mut cursor = base.start();

    for hole in merge_overlapping(holes) {
        if hole.end() <= cursor || !hole.overlaps(base) {
            continue;
        }
        if hole.start() > cursor {
            if let Ok(free) = TimeInterval::new(cursor, hole.start()) {
                remaining.push(free);
            }
        }
        cursor = cursor.max(hole.end());
        if cursor >= base.end() {
            return remaining;
        }
    }

    if let Ok(tail) = TimeInterval::new(cursor, base.end()) {
        remaining.push(tail);
    }
    remaining
}

/// Restrict every interval to `window`, dropping the ones outside it.
pub fn clip(intervals: &[TimeInterval], window: &TimeInterval) -> Vec<TimeInterval> {
    let clipped: Vec<TimeInterval> =
        intervals.iter().filter_map(|interval| interval.intersection(window)).collect();
    merge_overlapping(&clipped)
}

/// Total length covered by `intervals`, counting shared time once.
pub fn covered_duration(intervals: &[TimeInterval]) -> Duration {
    merge_overlapping(intervals)
        .iter()
        .fold(Duration::zero(), |total, interval| total + interval.duration())
}

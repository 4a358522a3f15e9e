//! Longest free-gap scan over busy intervals.
//!
//! Sorts intervals by start time, then walks them with a cursor from the
//! window start, measuring the gap before each busy interval and the tail
//! gap after the last one.
//!
//! Intervals are NOT merged: the cursor moves to each interval's end even
//! when that is earlier than where it already was, so an interval nested
//! inside its predecessor can overstate the following gap. Schedules are
//! expected not to nest meetings.

use crate::error::Result;
use crate::schedule::{self, BusyInterval};
use crate::week::WeekAnchor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Find the longest free slot within a window, given a list of busy intervals.
///
/// Intervals may arrive in any order; they are sorted by start time before
/// the scan. Returns `None` when no positive gap exists (busy intervals cover
/// the window back to back). On equal durations the earliest slot wins.
pub fn longest_free_slot(
    intervals: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Option<FreeSlot> {
    let mut ordered: Vec<&BusyInterval> = intervals.iter().collect();
    ordered.sort_by_key(|iv| (iv.start, iv.end));

    let mut best: Option<FreeSlot> = None;
    let mut cursor = window_start;

    for busy in ordered {
        consider(&mut best, cursor, busy.start);
        cursor = busy.end;
    }

    // Trailing gap after the last busy interval.
    consider(&mut best, cursor, window_end);

    best
}

/// Record the slot `from..to` when it beats the best one seen so far.
fn consider(best: &mut Option<FreeSlot>, from: DateTime<Utc>, to: DateTime<Utc>) {
    if to <= from {
        return;
    }
    let duration_minutes = (to - from).num_minutes();
    if best.is_none_or(|b| duration_minutes > b.duration_minutes) {
        *best = Some(FreeSlot {
            start: from,
            end: to,
            duration_minutes,
        });
    }
}

/// Length in whole minutes of the longest uninterrupted free interval within
/// the week containing `now`.
///
/// `now` only selects the calendar week (see [`WeekAnchor::containing`]);
/// its time of day does not affect the result. The schedule is a sequence of
/// `<day> <HH:MM>-<HH:MM>` lines as described in [`crate::schedule`]. An
/// empty schedule yields the full week, 10080 minutes; a schedule covering
/// the whole week yields 0.
///
/// # Errors
/// Propagates the first [`crate::ScheduleError`] hit while parsing.
pub fn find_longest_gap(now: DateTime<Utc>, schedule: &str) -> Result<i64> {
    let week = WeekAnchor::containing(now);
    let intervals = schedule::parse_schedule(schedule, &week)?;

    Ok(longest_free_slot(&intervals, week.start, week.end)
        .map_or(0, |slot| slot.duration_minutes))
}

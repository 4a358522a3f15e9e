//! Week anchoring -- resolves day-abbreviation offsets against a calendar week.
//!
//! The analyzer works over a single seven-day window. `WeekAnchor` pins that
//! window to the Monday 00:00 preceding a caller-supplied reference instant,
//! so the same schedule evaluated against instants in the same week yields
//! the same timestamps.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};

/// The seven-day window a schedule is resolved against.
///
/// `start` is Monday 00:00 of the week containing the reference instant,
/// `end` is the following Monday 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAnchor {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WeekAnchor {
    /// Anchor the week containing `instant`.
    ///
    /// The anchor depends only on the instant's date: the most recent Monday
    /// at 00:00 (the same day's midnight when the instant falls on a Monday).
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let days_from_monday = instant.weekday().num_days_from_monday() as i64;
        let monday = instant.date_naive() - Duration::days(days_from_monday);
        let start = monday.and_time(NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + Duration::days(7),
        }
    }

    /// Midnight at the start of day `offset` (0 = Monday .. 6 = Sunday).
    pub fn day_start(&self, offset: u32) -> DateTime<Utc> {
        self.start + Duration::days(i64::from(offset))
    }

    /// Length of the window in whole minutes (always 10080).
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Resolve a three-letter weekday abbreviation to its offset from Monday.
///
/// Matching is case-insensitive. Returns `None` for anything that is not one
/// of the seven abbreviations; full day names are not accepted.
pub fn day_offset(token: &str) -> Option<u32> {
    let weekday = match token.to_ascii_lowercase().as_str() {
        "mon" => Weekday::Mon,
        "tue" => Weekday::Tue,
        "wed" => Weekday::Wed,
        "thu" => Weekday::Thu,
        "fri" => Weekday::Fri,
        "sat" => Weekday::Sat,
        "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday.num_days_from_monday())
}

//! Schedule parsing -- converts `<day> <HH:MM>-<HH:MM>` lines into timestamped
//! busy intervals within an anchored week.
//!
//! Each line names a weekday by its three-letter abbreviation followed by a
//! start and end clock time, e.g. `Tue 03:30-18:15`. Lines may appear in any
//! order and a day may appear on any number of lines. The non-standard end
//! time `24:00` is accepted as a sentinel for midnight at the start of the
//! next day; it is never valid as a start time.

use crate::error::{Result, ScheduleError};
use crate::week::{self, WeekAnchor};
use chrono::{DateTime, NaiveTime, Utc};

/// Separator between the day token and the time range.
const DAY_TIME_SEPARATOR: char = ' ';
/// Separator between the start and end times.
const RANGE_SEPARATOR: char = '-';
/// End-of-day sentinel, resolved to 00:00 of the following day.
const MIDNIGHT_ROLLOVER: &str = "24:00";

/// A busy period within the anchored week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Parse a schedule into busy intervals anchored to `week`.
///
/// Accepts `\n` and `\r\n` line endings. Intervals are returned in input
/// order; sorting them is the gap scanner's concern. An empty schedule
/// parses to an empty list; a blank line inside a non-empty schedule is a
/// [`ScheduleError::MalformedLine`].
///
/// # Errors
/// Returns [`ScheduleError::MalformedLine`] when a line does not split into
/// day token plus time range, [`ScheduleError::UnsupportedDay`] for an
/// unrecognized day abbreviation, and [`ScheduleError::InvalidTime`] for a
/// time token outside strict `HH:MM` (the `24:00` end sentinel excepted).
pub fn parse_schedule(schedule: &str, week: &WeekAnchor) -> Result<Vec<BusyInterval>> {
    schedule
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(line, index + 1, week))
        .collect()
}

fn parse_line(line: &str, line_no: usize, week: &WeekAnchor) -> Result<BusyInterval> {
    let malformed = || ScheduleError::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };

    let (day_token, range) = line.split_once(DAY_TIME_SEPARATOR).ok_or_else(malformed)?;
    let (start_token, end_token) = range.split_once(RANGE_SEPARATOR).ok_or_else(malformed)?;

    let offset = week::day_offset(day_token).ok_or_else(|| ScheduleError::UnsupportedDay {
        line: line_no,
        token: day_token.to_string(),
    })?;
    let day = week.day_start(offset);

    let start = day + clock_time(start_token, line_no)?;

    // `24:00` is not a parseable clock time; resolve it to the next midnight.
    let end = if end_token.eq_ignore_ascii_case(MIDNIGHT_ROLLOVER) {
        week.day_start(offset + 1)
    } else {
        day + clock_time(end_token, line_no)?
    };

    Ok(BusyInterval { start, end })
}

/// Parse a strict `HH:MM` token into an offset from midnight.
///
/// Exactly two digits, a colon, two digits; hour 00-23, minute 00-59.
/// A lenient `%H:%M` parse would also accept `9:30` or `+1:00`, which the
/// schedule format does not allow.
fn clock_time(token: &str, line_no: usize) -> Result<chrono::Duration> {
    let invalid = || ScheduleError::InvalidTime {
        line: line_no,
        token: token.to_string(),
    };

    let (hours, minutes) = token.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hour: u32 = hours.parse().map_err(|_| invalid())?;
    let minute: u32 = minutes.parse().map_err(|_| invalid())?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

    Ok(time - NaiveTime::MIN)
}

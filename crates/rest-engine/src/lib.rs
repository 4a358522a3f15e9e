//! # rest-engine
//!
//! Longest free-gap analysis for weekly meeting schedules.
//!
//! Given a schedule of busy intervals written as `<day> <HH:MM>-<HH:MM>`
//! lines (e.g. `Tue 03:30-18:15`), the engine anchors them to the calendar
//! week containing a caller-supplied reference instant and finds the longest
//! uninterrupted free interval in that week: the "longest sleep" between
//! meetings, including the stretch before the first meeting and after the
//! last.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use rest_engine::find_longest_gap;
//!
//! let now = Utc.with_ymd_and_hms(2026, 3, 18, 12, 0, 0).unwrap();
//! let minutes = find_longest_gap(now, "Mon 09:00-17:00\nTue 09:00-17:00").unwrap();
//! assert_eq!(minutes, 7620); // Tue 17:00 → next Mon 00:00
//! ```
//!
//! ## Modules
//!
//! - [`week`] — anchor the seven-day window, resolve day abbreviations
//! - [`schedule`] — parse schedule lines into timestamped busy intervals
//! - [`gap`] — scan sorted intervals for the longest free slot
//! - [`error`] — error types

pub mod error;
pub mod gap;
pub mod schedule;
pub mod week;

pub use error::ScheduleError;
pub use gap::{find_longest_gap, longest_free_slot, FreeSlot};
pub use schedule::{parse_schedule, BusyInterval};
pub use week::WeekAnchor;

//! Time-of-day model and parsing.
//!
//! Vendor data arrives with loosely typed time fields: `"HH:MM"` strings,
//! SQL `TIME` values (`"HH:MM:SS"`), ISO date-times, or already-parsed
//! chrono values. [`RawTime`] captures every accepted shape, and
//! [`parse_time`] normalizes it to a [`TimeOfDay`] as soon as it enters
//! the engine.
//!
//! # Time Model
//! All interval arithmetic is done in minutes since midnight (0..1439).
//! The engine grid is 30 minutes by default, but `TimeOfDay` itself holds
//! any minute so that off-grid vendor data is represented faithfully.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

const CLOCK_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Error returned when a time value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    /// Input was empty or whitespace.
    #[error("empty time value")]
    Empty,
    /// Input matched none of the accepted formats.
    #[error("unrecognized time value: {0:?}")]
    Unrecognized(String),
}

/// A wall-clock time of day with minute precision.
///
/// Ordering follows minutes since midnight. Serializes as `"HH:MM"`.
///
/// # Examples
///
/// ```
/// use u_booking::models::TimeOfDay;
///
/// let t: TimeOfDay = "13:30".parse().unwrap();
/// assert_eq!(t.to_minutes(), 810);
/// assert_eq!(t.format_12h(), "1:30 PM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 23:30, the latest grid point of a day.
    pub const LAST_HALF_HOUR: Self = Self {
        hour: 23,
        minute: 30,
    };

    /// Creates a time, or `None` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Hour (0..23).
    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0..59).
    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    #[inline]
    pub fn to_minutes(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Inverse of [`to_minutes`](Self::to_minutes).
    ///
    /// Returns `None` for offsets of a full day or more.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        })
    }

    /// Hour and minute of a chrono time (seconds are dropped).
    pub fn from_naive(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Renders a 12-hour clock string such as `"9:30 AM"` or `"12:00 PM"`.
    pub fn format_12h(&self) -> String {
        let (hour, suffix) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{}:{:02} {}", hour, self.minute, suffix)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeParseError::Empty);
        }

        // Clock forms first: "14:00", "14:00:00"
        for fmt in CLOCK_FORMATS {
            if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
                return Ok(Self::from_naive(t));
            }
        }

        // Offset-carrying ISO timestamps resolve to local wall-clock time
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_naive(dt.with_timezone(&Local).time()));
        }

        for fmt in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self::from_naive(dt.time()));
            }
        }

        Err(TimeParseError::Unrecognized(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A time field as supplied by the data-fetch layer.
///
/// Text values may hold either a clock time or an ISO date-time; the
/// chrono variants exist for in-process callers that already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    /// `"HH:MM"`, `"HH:MM:SS"`, or an ISO 8601 date-time string.
    Text(String),
    /// Date-time without offset (taken as local wall-clock).
    Naive(NaiveDateTime),
    /// Date-time with offset (converted to local wall-clock).
    Zoned(DateTime<FixedOffset>),
}

impl RawTime {
    /// Normalizes to a [`TimeOfDay`]. See [`parse_time`].
    pub fn to_time_of_day(&self) -> Option<TimeOfDay> {
        parse_time(self)
    }
}

impl From<&str> for RawTime {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawTime {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for RawTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for RawTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Zoned(value)
    }
}

/// Normalizes any raw time representation.
///
/// Returns `None` for empty or unparseable input. Never panics; callers
/// treat `None` as "no boundary known" and fall back to the most
/// restrictive reading.
pub fn parse_time(raw: &RawTime) -> Option<TimeOfDay> {
    match raw {
        RawTime::Text(s) => parse_time_str(s),
        RawTime::Naive(dt) => Some(TimeOfDay::from_naive(dt.time())),
        RawTime::Zoned(dt) => Some(TimeOfDay::from_naive(dt.with_timezone(&Local).time())),
    }
}

/// String form of [`parse_time`].
pub fn parse_time_str(s: &str) -> Option<TimeOfDay> {
    s.parse().ok()
}

/// Renders a time as a 12-hour clock string (`"1:00 PM"`).
pub fn format_time_12h(time: TimeOfDay) -> String {
    time.format_12h()
}

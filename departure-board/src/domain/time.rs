//! Timetable time handling.
//!
//! Line timetables arrive as free-form strings expected to hold "HH:MM"
//! tokens separated by commas, but frequently carrying placeholder text
//! instead ("Não informado", "Não operacional"). This module provides a
//! validated time-of-day type plus a permissive scanner that extracts every
//! well-formed token and ignores everything else.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A validated timetable time of day.
///
/// Timetable strings carry times as "HH:MM" with no date attached; the date
/// is always "today" at the moment the board is computed. This type
/// guarantees hour 0-23 and minute 0-59 by construction.
///
/// # Examples
///
/// ```
/// use departure_board::domain::TimetableTime;
///
/// let t = TimetableTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// // Invalid formats and out-of-range values are rejected
/// assert!(TimetableTime::parse_hhmm("1430").is_err());
/// assert!(TimetableTime::parse_hhmm("25:00").is_err());
/// assert!(TimetableTime::parse_hhmm("12:60").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimetableTime {
    time: NaiveTime,
}

impl TimetableTime {
    /// Parse a time from strict "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { time })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Date this time to a concrete day, at hh:mm:00.000.
    pub fn at_date(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time)
    }
}

impl fmt::Debug for TimetableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimetableTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimetableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Extract every valid "HH:MM" token from a free-form timetable string.
///
/// The scan is deliberately permissive: anything that is not a well-formed
/// token is skipped, including tokens whose hour or minute is out of range.
/// A string with no tokens at all yields an empty vector rather than an
/// error, so placeholder text degrades to "no departures" instead of
/// suppressing a whole line.
///
/// # Examples
///
/// ```
/// use departure_board::domain::scan_times;
///
/// let times = scan_times("05:00,06:15,07:30");
/// assert_eq!(times.len(), 3);
/// assert_eq!(times[0].to_string(), "05:00");
///
/// assert!(scan_times("Não informado").is_empty());
/// assert!(scan_times("").is_empty());
/// ```
pub fn scan_times(raw: &str) -> Vec<TimetableTime> {
    let bytes = raw.as_bytes();
    let mut times = Vec::new();
    let mut i = 0;

    while i + 5 <= bytes.len() {
        // A window is a token only if it is valid UTF-8 and survives the
        // strict parser; the digits of a matched token are consumed so they
        // cannot seed a second, overlapping match.
        let token = std::str::from_utf8(&bytes[i..i + 5])
            .ok()
            .and_then(|window| TimetableTime::parse_hhmm(window).ok());

        match token {
            Some(time) => {
                times.push(time);
                i += 5;
            }
            None => i += 1,
        }
    }

    times
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

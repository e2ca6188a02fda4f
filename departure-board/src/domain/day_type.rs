//! Day-type selection for timetables.
//!
//! Every line carries three raw timetable strings; which one applies is
//! decided purely by the calendar day the board is computed on.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Which of a line's timetable strings applies to a given date.
///
/// # Examples
///
/// ```
/// use departure_board::domain::DayType;
/// use chrono::NaiveDate;
///
/// // 2024-03-15 is a Friday
/// let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(DayType::for_date(friday), DayType::Weekday);
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
/// assert_eq!(DayType::for_date(sunday), DayType::Sunday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    Saturday,
    Sunday,
}

impl DayType {
    /// Returns the day-type for a calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    /// Returns the day-type for a day of the week.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Weekday,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayType::Weekday => "weekday",
            DayType::Saturday => "saturday",
            DayType::Sunday => "sunday",
        };
        f.write_str(s)
    }
}

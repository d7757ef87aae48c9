//! Plain calendar date in the proleptic Gregorian calendar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalendarError;
use crate::gregorian::{
    DAYS_BEFORE_MONTH, MAX_YEAR, MIN_YEAR, check_year, civil_from_days, days_from_civil,
    days_in_month, days_in_year, is_leap_year,
};
use crate::weekday::Weekday;

/// A calendar date with no time of day and no offset.
///
/// Ordering is chronological. All arithmetic goes through day numbers, so
/// month and year boundaries (including February 29) need no special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside 1..=9999, the month
    /// is outside 1..=12, or the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `CalendarDate` from a year and a 1-based day of year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidOrdinal`] if `ordinal` is zero or past
    /// the end of the year.
    pub fn from_ordinal(year: i32, ordinal: u16) -> Result<Self, CalendarError> {
        check_year(year)?;
        if ordinal == 0 || ordinal > days_in_year(year) {
            return Err(CalendarError::InvalidOrdinal { ordinal, year });
        }
        let first = days_from_civil(year, 1, 1);
        Ok(Self::from_day_number(first + i64::from(ordinal) - 1))
    }

    /// Returns January 1 of `year`.
    pub fn first_of_year(year: i32) -> Result<Self, CalendarError> {
        Self::new(year, 1, 1)
    }

    /// Returns December 31 of `year`.
    pub fn last_of_year(year: i32) -> Result<Self, CalendarError> {
        Self::new(year, 12, 31)
    }

    // Day numbers handed in here always come from in-range dates.
    fn from_day_number(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self {
            year: year as i32,
            month,
            day,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day of year (1..=366).
    pub fn ordinal(self) -> u16 {
        let leap = u16::from(self.month > 2 && is_leap_year(self.year));
        DAYS_BEFORE_MONTH[self.month as usize] + u16::from(self.day) + leap
    }

    /// Returns the number of days since 1970-01-01.
    pub fn day_number(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::from_index((self.day_number() + 4).rem_euclid(7) as u8)
    }

    /// Returns `true` if this date falls on Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        self.weekday().is_weekend()
    }

    /// Returns the date `days` days later (or earlier, when negative).
    ///
    /// Returns `None` if the result leaves the supported year range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        let target = self.day_number().checked_add(days)?;
        let first = days_from_civil(MIN_YEAR, 1, 1);
        let last = days_from_civil(MAX_YEAR, 12, 31);
        (first..=last)
            .contains(&target)
            .then(|| Self::from_day_number(target))
    }

    /// Returns the following day, or `None` after 9999-12-31.
    pub fn next(self) -> Option<Self> {
        self.add_days(1)
    }

    /// Returns the preceding day, or `None` before 0001-01-01.
    pub fn prev(self) -> Option<Self> {
        self.add_days(-1)
    }

    /// Returns the signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        other.day_number() - self.day_number()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse {
            input: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(parse_err());
        }
        let digits = |range: std::ops::Range<usize>| -> Result<u32, CalendarError> {
            let part = &s[range];
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(parse_err());
            }
            part.parse().map_err(|_| parse_err())
        };
        let year = digits(0..4)? as i32;
        let month = digits(5..7)? as u8;
        let day = digits(8..10)? as u8;
        Self::new(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Date rules that holiday definitions are built from.

use bridgeday_calendar::{CalendarDate, CalendarError, Weekday, days_in_month};

/// Returns Easter Sunday of `year` (anonymous Gregorian algorithm).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is outside 1..=9999.
pub fn easter_sunday(year: i32) -> Result<CalendarDate, CalendarError> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    CalendarDate::new(year, month as u8, day as u8)
}

/// Returns the `n`-th (1-based) `weekday` of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] if the month has fewer than `n`
/// such weekdays, or another [`CalendarError`] for an invalid year/month.
pub fn nth_weekday(
    year: i32,
    month: u8,
    weekday: Weekday,
    n: u8,
) -> Result<CalendarDate, CalendarError> {
    let first = CalendarDate::new(year, month, 1)?;
    let offset = (7 + weekday.index() - first.weekday().index()) % 7;
    let day = 1 + offset + n.saturating_sub(1) * 7;
    CalendarDate::new(year, month, day)
}

/// Returns the last `weekday` of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError`] for an invalid year or month.
pub fn last_weekday(year: i32, month: u8, weekday: Weekday) -> Result<CalendarDate, CalendarError> {
    let last = CalendarDate::new(year, month, days_in_month(year, month)?)?;
    let offset = (7 + last.weekday().index() - weekday.index()) % 7;
    CalendarDate::new(year, month, last.day() - offset)
}

/// Returns the latest `weekday` that falls on or before `date`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if that day precedes 0001-01-01.
pub fn weekday_on_or_before(
    date: CalendarDate,
    weekday: Weekday,
) -> Result<CalendarDate, CalendarError> {
    let offset = (7 + date.weekday().index() - weekday.index()) % 7;
    date.add_days(-i64::from(offset))
        .ok_or(CalendarError::InvalidYear {
            year: date.year() - 1,
        })
}

/// One way of pinning a holiday to a date in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// Same month and day every year.
    Fixed { month: u8, day: u8 },
    /// The n-th weekday of a month.
    Nth { month: u8, weekday: Weekday, n: u8 },
    /// The last weekday of a month.
    Last { month: u8, weekday: Weekday },
    /// The given weekday on or before a fixed month/day.
    OnOrBefore {
        month: u8,
        day: u8,
        weekday: Weekday,
    },
    /// Signed day offset from Easter Sunday.
    Easter(i64),
}

pub(crate) const fn fixed(month: u8, day: u8) -> Rule {
    Rule::Fixed { month, day }
}

pub(crate) const fn nth(month: u8, weekday: Weekday, n: u8) -> Rule {
    Rule::Nth { month, weekday, n }
}

pub(crate) const fn last(month: u8, weekday: Weekday) -> Rule {
    Rule::Last { month, weekday }
}

pub(crate) const fn on_or_before(month: u8, day: u8, weekday: Weekday) -> Rule {
    Rule::OnOrBefore {
        month,
        day,
        weekday,
    }
}

pub(crate) const fn easter(offset: i64) -> Rule {
    Rule::Easter(offset)
}

impl Rule {
    /// Resolves the rule to a concrete date in `year`.
    pub(crate) fn resolve(self, year: i32) -> Result<CalendarDate, CalendarError> {
        match self {
            Rule::Fixed { month, day } => CalendarDate::new(year, month, day),
            Rule::Nth { month, weekday, n } => nth_weekday(year, month, weekday, n),
            Rule::Last { month, weekday } => last_weekday(year, month, weekday),
            Rule::OnOrBefore {
                month,
                day,
                weekday,
            } => weekday_on_or_before(CalendarDate::new(year, month, day)?, weekday),
            Rule::Easter(offset) => easter_sunday(year)?
                .add_days(offset)
                .ok_or(CalendarError::InvalidYear { year }),
        }
    }
}

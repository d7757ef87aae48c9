//! Gregorian calendar rules and day-number conversion.
//!
//! Day numbers count days since 1970-01-01 (day 0). The conversions follow
//! the era-based civil algorithms, which are exact for the whole proleptic
//! Gregorian calendar and need no lookup beyond the month tables below.

use crate::error::CalendarError;

/// Smallest supported year.
pub const MIN_YEAR: i32 = 1;

/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed before the first of each month in a common year (index 0 unused).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Every fourth year is a leap year, except centuries that are not
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

/// Checks that `year` lies in the supported range.
pub(crate) fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::InvalidYear { year })
    }
}

/// Converts a civil date into a day number (days since 1970-01-01).
pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let m = i64::from(month);
    let d = i64::from(day);
    let y = i64::from(year) - i64::from(m <= 2);
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Converts a day number back into `(year, month, day)`.
pub(crate) fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

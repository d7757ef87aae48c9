//! Date sequence generation.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::gregorian::days_in_year;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces up to `n_days` consecutive dates by
/// repeatedly advancing to the next day. The sequence stops early only if it
/// would run past 9999-12-31.
///
/// # Example
///
/// ```
/// use bridgeday_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::new(2024, 12, 30).unwrap();
/// let dates = date_sequence(start, 4);
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[3].to_string(), "2025-01-02");
/// ```
pub fn date_sequence(start: CalendarDate, n_days: usize) -> Vec<CalendarDate> {
    let mut dates = Vec::with_capacity(n_days);
    let mut current = Some(start);
    while dates.len() < n_days {
        let Some(date) = current else { break };
        dates.push(date);
        current = date.next();
    }
    dates
}

/// Returns every date of `year` in chronological order.
///
/// The result has 365 entries, or 366 in leap years.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is outside 1..=9999.
pub fn year_dates(year: i32) -> Result<Vec<CalendarDate>, CalendarError> {
    let start = CalendarDate::first_of_year(year)?;
    Ok(date_sequence(start, days_in_year(year) as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = CalendarDate::new(2025, 1, 1).unwrap();
        assert!(date_sequence(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = CalendarDate::new(2025, 6, 15).unwrap();
        let dates = date_sequence(start, 1);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn leap_day_included() {
        let start = CalendarDate::new(2024, 2, 28).unwrap();
        let dates = date_sequence(start, 3);
        assert_eq!(dates[1], CalendarDate::new(2024, 2, 29).unwrap());
        assert_eq!(dates[2], CalendarDate::new(2024, 3, 1).unwrap());
    }

    #[test]
    fn stops_at_end_of_range() {
        let start = CalendarDate::new(9999, 12, 30).unwrap();
        let dates = date_sequence(start, 5);
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn year_dates_lengths() {
        assert_eq!(year_dates(2025).unwrap().len(), 365);
        assert_eq!(year_dates(2024).unwrap().len(), 366);
    }

    #[test]
    fn year_dates_invalid_year() {
        assert_eq!(
            year_dates(0).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }
        );
    }
}

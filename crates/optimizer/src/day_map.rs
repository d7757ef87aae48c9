//! Per-day classification of a whole year.

use std::collections::HashMap;

use bridgeday_calendar::{CalendarDate, year_dates};
use bridgeday_holidays::Holiday;
use tracing::debug;

use crate::day::CalendarDay;
use crate::error::OptimizerError;
use crate::period::VacationPeriod;

/// Every day of one year, classified as working day, weekend or holiday.
///
/// Days are stored in date order, so the day with ordinal `n` lives at
/// index `n - 1`. The map is never modified after construction;
/// [`with_leave_periods`](Self::with_leave_periods) returns an annotated copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearDayMap {
    year: i32,
    days: Vec<CalendarDay>,
}

impl YearDayMap {
    /// Returns the year this map covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the number of days (365 or 366).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`: a year has at least 365 days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns all days in date order.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Iterates over all days in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.days.iter()
    }

    /// Consumes the map and returns its days in date order.
    pub fn into_days(self) -> Vec<CalendarDay> {
        self.days
    }

    /// Looks up a date; `None` if it lies outside the map's year.
    pub fn get(&self, date: CalendarDate) -> Option<&CalendarDay> {
        self.index_of(date).map(|i| &self.days[i])
    }

    /// Returns `true` if `date` is in this year and is a weekend day or holiday.
    pub fn is_free(&self, date: CalendarDate) -> bool {
        self.get(date).is_some_and(CalendarDay::is_free)
    }

    pub(crate) fn index_of(&self, date: CalendarDate) -> Option<usize> {
        (date.year() == self.year).then(|| usize::from(date.ordinal()) - 1)
    }

    pub(crate) fn day_at(&self, index: usize) -> &CalendarDay {
        &self.days[index]
    }

    pub(crate) fn is_free_at(&self, index: usize) -> bool {
        self.days[index].is_free()
    }

    /// Holiday names in `start..=end` (indices), in date order.
    pub(crate) fn holiday_names(&self, start: usize, end: usize) -> Vec<String> {
        self.days[start..=end]
            .iter()
            .filter_map(|d| d.holiday_name().map(str::to_string))
            .collect()
    }

    /// Returns a copy with leave booked on every working day inside the
    /// given periods.
    ///
    /// Period days outside this map's year are ignored.
    pub fn with_leave_periods(&self, periods: &[VacationPeriod]) -> YearDayMap {
        let mut days = self.days.clone();
        for period in periods {
            for (i, day) in self.days.iter().enumerate() {
                let date = day.date();
                if date >= period.start_date() && date <= period.end_date() {
                    days[i] = day.with_leave();
                }
            }
        }
        YearDayMap {
            year: self.year,
            days,
        }
    }
}

impl<'a> IntoIterator for &'a YearDayMap {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Classifies every day of `year` against a holiday list.
///
/// Weekend status comes from the weekday alone. A day is a holiday when a
/// holiday with exactly that date is supplied; if several share a date the
/// last one wins. Holidays dated outside `year` are ignored.
///
/// # Errors
///
/// Returns [`OptimizerError::Calendar`] if `year` is outside 1..=9999.
pub fn build_year_day_map(year: i32, holidays: &[Holiday]) -> Result<YearDayMap, OptimizerError> {
    let mut names: HashMap<CalendarDate, &str> = HashMap::with_capacity(holidays.len());
    for holiday in holidays {
        names.insert(holiday.date, holiday.name.as_str());
    }

    let days: Vec<CalendarDay> = year_dates(year)?
        .into_iter()
        .map(|date| CalendarDay::new(date, names.get(&date).map(|n| n.to_string())))
        .collect();

    debug!(
        year,
        n_days = days.len(),
        n_holidays = days.iter().filter(|d| d.is_holiday()).count(),
        "built year day map"
    );
    Ok(YearDayMap { year, days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgeday_holidays::HolidayCategory;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn holiday(s: &str, name: &str) -> Holiday {
        Holiday::federal(date(s), name)
    }

    #[test]
    fn covers_whole_year() {
        let map = build_year_day_map(2025, &[]).unwrap();
        assert_eq!(map.len(), 365);
        assert_eq!(map.year(), 2025);
        assert_eq!(map.days()[0].date(), date("2025-01-01"));
        assert_eq!(map.days()[364].date(), date("2025-12-31"));

        let leap = build_year_day_map(2024, &[]).unwrap();
        assert_eq!(leap.len(), 366);
    }

    #[test]
    fn weekends_only_without_holidays() {
        let map = build_year_day_map(2025, &[]).unwrap();
        assert_eq!(map.iter().filter(|d| d.is_weekend()).count(), 104);
        assert_eq!(map.iter().filter(|d| d.is_holiday()).count(), 0);
    }

    #[test]
    fn holidays_are_marked() {
        let map = build_year_day_map(2025, &[holiday("2025-07-04", "Independence Day")]).unwrap();
        let day = map.get(date("2025-07-04")).unwrap();
        assert!(day.is_holiday());
        assert_eq!(day.holiday_name(), Some("Independence Day"));
        assert!(!map.get(date("2025-07-03")).unwrap().is_holiday());
    }

    #[test]
    fn duplicate_dates_last_write_wins() {
        let holidays = [
            holiday("2025-12-24", "Christmas Eve"),
            Holiday::new(
                date("2025-12-24"),
                "Office closed",
                HolidayCategory::Observed,
            ),
        ];
        let map = build_year_day_map(2025, &holidays).unwrap();
        assert_eq!(
            map.get(date("2025-12-24")).unwrap().holiday_name(),
            Some("Office closed")
        );
    }

    #[test]
    fn out_of_year_holidays_ignored() {
        let map = build_year_day_map(2025, &[holiday("2026-01-01", "New Year's Day")]).unwrap();
        assert_eq!(map.iter().filter(|d| d.is_holiday()).count(), 0);
        assert!(map.get(date("2026-01-01")).is_none());
    }

    #[test]
    fn is_free() {
        let map = build_year_day_map(2025, &[holiday("2025-12-25", "Christmas Day")]).unwrap();
        assert!(map.is_free(date("2025-12-25")));
        assert!(map.is_free(date("2025-12-27")));
        assert!(!map.is_free(date("2025-12-26")));
        assert!(!map.is_free(date("2024-12-28")));
    }

    #[test]
    fn invalid_year() {
        let result = build_year_day_map(0, &[]);
        assert!(matches!(result, Err(OptimizerError::Calendar(_))));
    }

    #[test]
    fn with_leave_periods_returns_new_map() {
        let map = build_year_day_map(2025, &[holiday("2025-12-25", "Christmas Day")]).unwrap();
        let period = VacationPeriod::new(
            date("2025-12-25"),
            date("2025-12-28"),
            4,
            1,
            2,
            1,
            vec!["Christmas Day".into()],
        );
        let booked = map.with_leave_periods(&[period]);

        assert!(booked.get(date("2025-12-26")).unwrap().is_bridge());
        assert!(!booked.get(date("2025-12-25")).unwrap().is_leave_day());
        assert!(!booked.get(date("2025-12-27")).unwrap().is_leave_day());
        assert!(!map.get(date("2025-12-26")).unwrap().is_bridge());
        assert_eq!(booked.iter().filter(|d| d.is_bridge()).count(), 1);
    }
}

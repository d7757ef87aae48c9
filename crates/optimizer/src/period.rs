//! Selected stretches of time off.

use bridgeday_calendar::CalendarDate;
use serde::Serialize;

/// A contiguous block of days off accepted into the final plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacationPeriod {
    start_date: CalendarDate,
    end_date: CalendarDate,
    total_days: u32,
    leave_days_used: u32,
    weekend_days: u32,
    holiday_days: u32,
    holiday_names: Vec<String>,
    efficiency: f64,
}

impl VacationPeriod {
    /// Creates a new period; efficiency is `total_days / leave_days_used`.
    pub(crate) fn new(
        start_date: CalendarDate,
        end_date: CalendarDate,
        total_days: u32,
        leave_days_used: u32,
        weekend_days: u32,
        holiday_days: u32,
        holiday_names: Vec<String>,
    ) -> Self {
        let efficiency = if leave_days_used > 0 {
            f64::from(total_days) / f64::from(leave_days_used)
        } else {
            0.0
        };
        Self {
            start_date,
            end_date,
            total_days,
            leave_days_used,
            weekend_days,
            holiday_days,
            holiday_names,
            efficiency,
        }
    }

    /// Returns the first day off.
    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    /// Returns the last day off (inclusive).
    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    /// Returns the length of the period in days.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Returns the leave days spent on this period.
    pub fn leave_days_used(&self) -> u32 {
        self.leave_days_used
    }

    /// Returns the number of Saturdays and Sundays in the period.
    pub fn weekend_days(&self) -> u32 {
        self.weekend_days
    }

    /// Returns the number of holidays in the period.
    ///
    /// A holiday on a weekend counts here and in
    /// [`weekend_days`](Self::weekend_days).
    pub fn holiday_days(&self) -> u32 {
        self.holiday_days
    }

    /// Returns the names of the holidays in the period, in date order.
    pub fn holiday_names(&self) -> &[String] {
        &self.holiday_names
    }

    /// Returns days off gained per leave day spent.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns `true` if `date` falls inside the period.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn accessors() {
        let p = VacationPeriod::new(
            date("2025-11-22"),
            date("2025-11-30"),
            9,
            3,
            4,
            1,
            vec!["Thanksgiving".into()],
        );
        assert_eq!(p.start_date(), date("2025-11-22"));
        assert_eq!(p.end_date(), date("2025-11-30"));
        assert_eq!(p.total_days(), 9);
        assert_eq!(p.leave_days_used(), 3);
        assert_eq!(p.weekend_days(), 4);
        assert_eq!(p.holiday_days(), 1);
        assert_eq!(p.holiday_names(), ["Thanksgiving"]);
        assert!((p.efficiency() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn contains() {
        let p = VacationPeriod::new(date("2025-12-25"), date("2025-12-28"), 4, 1, 2, 1, vec![]);
        assert!(p.contains(date("2025-12-25")));
        assert!(p.contains(date("2025-12-28")));
        assert!(!p.contains(date("2025-12-24")));
        assert!(!p.contains(date("2025-12-29")));
    }

    #[test]
    fn zero_leave_has_zero_efficiency() {
        let p = VacationPeriod::new(date("2025-12-27"), date("2025-12-28"), 2, 0, 2, 0, vec![]);
        assert_eq!(p.efficiency(), 0.0);
    }
}

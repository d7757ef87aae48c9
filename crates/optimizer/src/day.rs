//! Classification of a single calendar day.

use bridgeday_calendar::{CalendarDate, Weekday};
use serde::Serialize;

/// One day of the target year and how it counts towards time off.
///
/// A day is *free* when it is a weekend day or a holiday. Leave flags are
/// only ever set on a copy produced by [`CalendarDay::with_leave`], so a
/// freshly classified day always has `is_leave_day == is_bridge == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    date: CalendarDate,
    weekday: Weekday,
    is_weekend: bool,
    is_holiday: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    holiday_name: Option<String>,
    is_leave_day: bool,
    is_bridge: bool,
}

impl CalendarDay {
    /// Classifies `date`, marking it as a holiday when `holiday_name` is set.
    pub fn new(date: CalendarDate, holiday_name: Option<String>) -> Self {
        let weekday = date.weekday();
        Self {
            date,
            weekday,
            is_weekend: weekday.is_weekend(),
            is_holiday: holiday_name.is_some(),
            holiday_name,
            is_leave_day: false,
            is_bridge: false,
        }
    }

    /// Returns a copy with a leave day booked on it.
    ///
    /// Booking leave on a free day is a no-op: weekends and holidays never
    /// consume budget.
    pub fn with_leave(&self) -> Self {
        let mut day = self.clone();
        if !day.is_free() {
            day.is_leave_day = true;
            day.is_bridge = true;
        }
        day
    }

    /// Returns the date.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the weekday index (0 = Sunday .. 6 = Saturday).
    pub fn weekday_index(&self) -> u8 {
        self.weekday.index()
    }

    /// Returns `true` on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    /// Returns `true` if the day is a holiday.
    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    /// Returns the holiday name, present iff [`is_holiday`](Self::is_holiday).
    pub fn holiday_name(&self) -> Option<&str> {
        self.holiday_name.as_deref()
    }

    /// Returns `true` if a leave day is booked on this day.
    pub fn is_leave_day(&self) -> bool {
        self.is_leave_day
    }

    /// Returns `true` if this is a booked working day joining free days.
    pub fn is_bridge(&self) -> bool {
        self.is_bridge
    }

    /// Returns `true` for weekend days and holidays.
    pub fn is_free(&self) -> bool {
        self.is_weekend || self.is_holiday
    }
}

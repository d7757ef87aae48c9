//! Candidate blocks of time off produced by the bridge search.

use bridgeday_calendar::CalendarDate;
use serde::Serialize;

/// A contiguous span that becomes entirely free by booking leave on the
/// bridge joining its free runs.
///
/// Opportunities are transient: the bridge finder creates them, the
/// deduplicator and allocator consume them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeOpportunity {
    /// First day of the span.
    start_date: CalendarDate,
    /// Last day of the span (inclusive).
    end_date: CalendarDate,
    /// Length of the bridge in days, free days inside it included.
    leave_days_needed: u32,
    /// Span length in days.
    total_days_off: u32,
    /// `total_days_off / leave_days_needed`.
    efficiency: f64,
    /// Holiday names inside the span, in date order.
    holiday_names: Vec<String>,
}

impl BridgeOpportunity {
    /// Creates a new opportunity.
    ///
    /// `leave_days_needed` must be positive.
    pub(crate) fn new(
        start_date: CalendarDate,
        end_date: CalendarDate,
        leave_days_needed: u32,
        total_days_off: u32,
        holiday_names: Vec<String>,
    ) -> Self {
        debug_assert!(leave_days_needed > 0);
        debug_assert!(start_date <= end_date);
        Self {
            start_date,
            end_date,
            leave_days_needed,
            total_days_off,
            efficiency: f64::from(total_days_off) / f64::from(leave_days_needed),
            holiday_names,
        }
    }

    /// Returns the first day of the span.
    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    /// Returns the last day of the span (inclusive).
    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    /// Returns the number of leave days the span costs.
    pub fn leave_days_needed(&self) -> u32 {
        self.leave_days_needed
    }

    /// Returns the span length in days.
    pub fn total_days_off(&self) -> u32 {
        self.total_days_off
    }

    /// Returns days off gained per leave day spent.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the holiday names inside the span, in date order.
    pub fn holiday_names(&self) -> &[String] {
        &self.holiday_names
    }

    /// Returns `true` if the two spans share at least one day.
    pub fn overlaps(&self, other: &BridgeOpportunity) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

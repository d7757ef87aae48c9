//! Totals and synopsis of a finished allocation.

use serde::Serialize;

use crate::allocate::Allocation;
use crate::period::VacationPeriod;

/// Synopsis used when no period was selected.
pub const NO_OPPORTUNITIES_MESSAGE: &str =
    "No optimization opportunities found for the given parameters.";

/// Final output of [`optimize_leave_plan`](crate::optimize_leave_plan).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Sum of `total_days` over all periods.
    total_days_off: u32,
    /// Leave days spent, never more than `available_leave_days`.
    leave_days_used: u32,
    /// Budget the plan was computed for.
    available_leave_days: u32,
    /// `total_days_off / leave_days_used`, or exactly 0 when nothing was spent.
    efficiency: f64,
    /// Selected periods, ordered by start date.
    periods: Vec<VacationPeriod>,
    /// One-sentence human-readable synopsis.
    summary: String,
}

impl OptimizationResult {
    /// Returns the total number of days off across all periods.
    pub fn total_days_off(&self) -> u32 {
        self.total_days_off
    }

    /// Returns the leave days spent.
    pub fn leave_days_used(&self) -> u32 {
        self.leave_days_used
    }

    /// Returns the leave budget the plan was computed for.
    pub fn available_leave_days(&self) -> u32 {
        self.available_leave_days
    }

    /// Returns days off per leave day spent, 0 if none was spent.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the selected periods, ordered by start date.
    pub fn periods(&self) -> &[VacationPeriod] {
        &self.periods
    }

    /// Returns the synopsis text.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the period with the most days off (the earliest on ties).
    pub fn longest_period(&self) -> Option<&VacationPeriod> {
        self.periods
            .iter()
            .reduce(|best, p| {
                if p.total_days() > best.total_days() {
                    p
                } else {
                    best
                }
            })
    }
}

/// Computes totals and the synopsis for an allocation.
pub fn summarize(allocation: Allocation) -> OptimizationResult {
    let available_leave_days = allocation.budget();
    let leave_days_used = allocation.leave_days_used();
    let periods = allocation.into_periods();
    let total_days_off: u32 = periods.iter().map(VacationPeriod::total_days).sum();
    let efficiency = if leave_days_used > 0 {
        f64::from(total_days_off) / f64::from(leave_days_used)
    } else {
        0.0
    };
    let summary = synopsis(&periods, leave_days_used, total_days_off, efficiency);
    OptimizationResult {
        total_days_off,
        leave_days_used,
        available_leave_days,
        efficiency,
        periods,
        summary,
    }
}

fn synopsis(
    periods: &[VacationPeriod],
    leave_days_used: u32,
    total_days_off: u32,
    efficiency: f64,
) -> String {
    let Some(longest) = periods.iter().map(VacationPeriod::total_days).max() else {
        return NO_OPPORTUNITIES_MESSAGE.to_string();
    };
    let bonus = ((efficiency - 1.0) * 100.0).round() as i64;
    let n = periods.len();
    format!(
        "Using {leave_days_used} leave days, you can get {total_days_off} days off \
         ({bonus}% bonus). That's {n} vacation period{}, with the longest being \
         {longest} days.",
        if n == 1 { "" } else { "s" }
    )
}

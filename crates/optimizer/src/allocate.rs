//! Greedy selection of vacation periods within a leave budget.

use tracing::{debug, trace};

use crate::claims::Claims;
use crate::config::OptimizerConfig;
use crate::day_map::YearDayMap;
use crate::opportunity::BridgeOpportunity;
use crate::period::VacationPeriod;

/// Periods accepted by [`allocate`] together with the budget they were
/// drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    periods: Vec<VacationPeriod>,
    budget: u32,
    remaining: u32,
}

impl Allocation {
    /// Returns the accepted periods, ordered by start date.
    pub fn periods(&self) -> &[VacationPeriod] {
        &self.periods
    }

    /// Consumes the allocation and returns its periods.
    pub fn into_periods(self) -> Vec<VacationPeriod> {
        self.periods
    }

    /// Returns the leave budget the allocation started with.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Returns the leave days left unspent.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the leave days spent, `budget - remaining`.
    pub fn leave_days_used(&self) -> u32 {
        self.budget - self.remaining
    }
}

/// Selects non-overlapping periods from `opportunities` within `budget`.
///
/// Opportunities are considered in the order given by the configured
/// [`SelectionPolicy`](crate::SelectionPolicy). One is skipped when it
/// needs more leave than remains, when it is longer than
/// `max_consecutive_days`, or when it shares a day with an accepted period.
/// Selection stops once the budget is spent. Weekend and holiday counts of
/// each accepted period are read from `map`.
///
/// The accepted periods are returned in chronological order.
pub fn allocate(
    opportunities: &[BridgeOpportunity],
    map: &YearDayMap,
    budget: u32,
    config: &OptimizerConfig,
) -> Allocation {
    let mut ordered = opportunities.to_vec();
    config.policy().sort(&mut ordered);

    let mut remaining = budget;
    let mut claims = Claims::new();
    let mut periods = Vec::new();

    for opp in &ordered {
        if remaining == 0 {
            break;
        }
        if opp.leave_days_needed() > remaining {
            trace!(
                start = %opp.start_date(),
                need = opp.leave_days_needed(),
                remaining,
                "skip: over budget"
            );
            continue;
        }
        if opp.total_days_off() > config.max_consecutive_days() {
            trace!(
                start = %opp.start_date(),
                days = opp.total_days_off(),
                "skip: too long"
            );
            continue;
        }
        if !claims.try_claim(opp.start_date(), opp.end_date()) {
            trace!(start = %opp.start_date(), "skip: overlaps accepted period");
            continue;
        }
        periods.push(to_period(opp, map));
        remaining -= opp.leave_days_needed();
    }

    periods.sort_by_key(VacationPeriod::start_date);
    debug!(
        policy = %config.policy(),
        n_candidates = ordered.len(),
        n_accepted = periods.len(),
        budget,
        remaining,
        "allocation complete"
    );
    Allocation {
        periods,
        budget,
        remaining,
    }
}

/// Re-scans the opportunity's span against the day map.
fn to_period(opp: &BridgeOpportunity, map: &YearDayMap) -> VacationPeriod {
    let mut weekend_days = 0;
    let mut holiday_days = 0;
    let mut holiday_names = Vec::new();
    for day in map
        .iter()
        .filter(|d| opp.start_date() <= d.date() && d.date() <= opp.end_date())
    {
        if day.is_weekend() {
            weekend_days += 1;
        }
        if day.is_holiday() {
            holiday_days += 1;
            if let Some(name) = day.holiday_name() {
                holiday_names.push(name.to_string());
            }
        }
    }
    VacationPeriod::new(
        opp.start_date(),
        opp.end_date(),
        opp.total_days_off(),
        opp.leave_days_needed(),
        weekend_days,
        holiday_days,
        holiday_names,
    )
}

//! End-to-end entry points.

use bridgeday_holidays::Holiday;
use tracing::info;

use crate::allocate::allocate;
use crate::bridge::find_in_day_map;
use crate::config::OptimizerConfig;
use crate::day::CalendarDay;
use crate::day_map::build_year_day_map;
use crate::dedup::deduplicate_opportunities;
use crate::error::OptimizerError;
use crate::summary::{OptimizationResult, summarize};

/// Plans leave for `year` to maximise days off.
///
/// Runs the whole pipeline: day map, bridge search, deduplication, greedy
/// allocation and summary. The call is a pure function of its arguments.
/// A budget larger than `u32::MAX` is treated as `u32::MAX`.
///
/// # Errors
///
/// Returns [`OptimizerError::NegativeBudget`] for a negative budget, a
/// configuration error from [`OptimizerConfig::validate`], or
/// [`OptimizerError::Calendar`] for an invalid year. Finding nothing worth
/// booking is not an error.
///
/// # Example
///
/// ```
/// use bridgeday_holidays::{Region, holidays_for_region};
/// use bridgeday_optimizer::{OptimizerConfig, optimize_leave_plan};
///
/// let holidays = holidays_for_region(Region::UnitedStates, 2025).unwrap();
/// let result = optimize_leave_plan(2025, &holidays, 15, &OptimizerConfig::new()).unwrap();
/// assert!(result.leave_days_used() <= 15);
/// assert!(result.efficiency() > 1.0);
/// ```
#[tracing::instrument(
    skip(holidays, config),
    fields(n_holidays = holidays.len(), policy = %config.policy())
)]
pub fn optimize_leave_plan(
    year: i32,
    holidays: &[Holiday],
    available_leave_days: i64,
    config: &OptimizerConfig,
) -> Result<OptimizationResult, OptimizerError> {
    if available_leave_days < 0 {
        return Err(OptimizerError::NegativeBudget {
            budget: available_leave_days,
        });
    }
    config.validate()?;
    let budget = u32::try_from(available_leave_days).unwrap_or(u32::MAX);

    let map = build_year_day_map(year, holidays)?;
    let found = find_in_day_map(&map, config.max_bridge_days());
    let unique = deduplicate_opportunities(found);
    let result = summarize(allocate(&unique, &map, budget, config));

    info!(
        total_days_off = result.total_days_off(),
        leave_days_used = result.leave_days_used(),
        n_periods = result.periods().len(),
        "leave plan optimized"
    );
    Ok(result)
}

/// Returns every day of `year` with the plan's leave days booked.
///
/// The classification is rebuilt from `holidays`; working days inside a
/// selected period are flagged as leave and bridge days. Pass the same
/// holidays the plan was computed with.
///
/// # Errors
///
/// Returns [`OptimizerError::Calendar`] for an invalid year.
pub fn materialize_calendar(
    year: i32,
    holidays: &[Holiday],
    result: &OptimizationResult,
) -> Result<Vec<CalendarDay>, OptimizerError> {
    let map = build_year_day_map(year, holidays)?;
    Ok(map.with_leave_periods(result.periods()).into_days())
}

//! Search for working days that join free spans.
//!
//! Every free day of the year (weekend or holiday) is the seed of one
//! search. The seed is widened to its maximal free run, then bridges of
//! `1..=max_bridge_days` days are tried on both sides: a bridge is useful
//! when the day just beyond it is free again, in which case the candidate
//! span runs to the far end of that second free run. The best candidate per
//! seed is kept, with later candidates replacing it only on strictly higher
//! efficiency, so shorter forward bridges win ties.
//!
//! Seeds in the same run yield the same candidate; the duplicates are left
//! for [`deduplicate_opportunities`](crate::deduplicate_opportunities).

use bridgeday_holidays::Holiday;
use tracing::{debug, trace};

use crate::day_map::{YearDayMap, build_year_day_map};
use crate::error::OptimizerError;
use crate::opportunity::BridgeOpportunity;

/// Default longest bridge, in consecutive leave days, the search tries.
pub const DEFAULT_MAX_BRIDGE_DAYS: u32 = 5;

/// Finds bridge opportunities in `year`, one attempt per free day.
///
/// Only opportunities returning more than one day off per leave day are
/// kept. The result is in discovery order and contains duplicates; it is
/// not deduplicated.
///
/// # Errors
///
/// Returns [`OptimizerError::InvalidMaxBridgeDays`] if `max_bridge_days`
/// is zero, or [`OptimizerError::Calendar`] for an invalid year.
///
/// # Example
///
/// ```
/// use bridgeday_holidays::Holiday;
/// use bridgeday_optimizer::find_bridge_opportunities;
///
/// let christmas = Holiday::federal("2025-12-25".parse().unwrap(), "Christmas Day");
/// let found = find_bridge_opportunities(2025, &[christmas], 5).unwrap();
/// assert!(found.iter().all(|o| o.efficiency() > 1.0));
/// ```
pub fn find_bridge_opportunities(
    year: i32,
    holidays: &[Holiday],
    max_bridge_days: u32,
) -> Result<Vec<BridgeOpportunity>, OptimizerError> {
    if max_bridge_days == 0 {
        return Err(OptimizerError::InvalidMaxBridgeDays {
            value: max_bridge_days,
        });
    }
    let map = build_year_day_map(year, holidays)?;
    Ok(find_in_day_map(&map, max_bridge_days))
}

/// Runs the bridge search over an already classified year.
pub(crate) fn find_in_day_map(map: &YearDayMap, max_bridge_days: u32) -> Vec<BridgeOpportunity> {
    let mut found = Vec::new();
    let mut discarded = 0usize;
    for seed in 0..map.len() {
        if !map.is_free_at(seed) {
            continue;
        }
        match explore(map, seed, max_bridge_days as usize) {
            Some(opp) if opp.efficiency() > 1.0 => found.push(opp),
            Some(_) => discarded += 1,
            None => {}
        }
    }
    debug!(
        year = map.year(),
        n_found = found.len(),
        n_discarded = discarded,
        "bridge search complete"
    );
    found
}

/// Tries every bridge length on both sides of the free run containing `seed`.
fn explore(map: &YearDayMap, seed: usize, max_bridge: usize) -> Option<BridgeOpportunity> {
    let run_start = free_run_start(map, seed);
    let run_end = free_run_end(map, seed);
    let last = map.len() - 1;
    let mut best: Option<BridgeOpportunity> = None;

    for gap in 1..=max_bridge {
        let bridge_end = run_end + gap;
        if bridge_end > last {
            break;
        }
        let beyond = bridge_end + 1;
        if beyond <= last && map.is_free_at(beyond) {
            let far_end = free_run_end(map, beyond);
            keep_better(&mut best, span(map, run_start, far_end, gap));
        }
    }

    for gap in 1..=max_bridge {
        let Some(bridge_start) = run_start.checked_sub(gap) else {
            break;
        };
        let Some(beyond) = bridge_start.checked_sub(1) else {
            continue;
        };
        if map.is_free_at(beyond) {
            let far_start = free_run_start(map, beyond);
            keep_better(&mut best, span(map, far_start, run_end, gap));
        }
    }

    if let Some(opp) = &best {
        trace!(
            seed = %map.day_at(seed).date(),
            start = %opp.start_date(),
            end = %opp.end_date(),
            efficiency = opp.efficiency(),
            "best bridge for seed"
        );
    }
    best
}

fn keep_better(best: &mut Option<BridgeOpportunity>, candidate: BridgeOpportunity) {
    if best
        .as_ref()
        .is_none_or(|b| candidate.efficiency() > b.efficiency())
    {
        *best = Some(candidate);
    }
}

/// Builds the opportunity covering indices `start..=end`, charged `gap`
/// leave days.
///
/// The charge is the bridge length even when the bridge holds a free day.
fn span(map: &YearDayMap, start: usize, end: usize, gap: usize) -> BridgeOpportunity {
    BridgeOpportunity::new(
        map.day_at(start).date(),
        map.day_at(end).date(),
        gap as u32,
        (end - start + 1) as u32,
        map.holiday_names(start, end),
    )
}

/// First index of the free run containing `i`.
fn free_run_start(map: &YearDayMap, mut i: usize) -> usize {
    while i > 0 && map.is_free_at(i - 1) {
        i -= 1;
    }
    i
}

/// Last index of the free run containing `i`.
fn free_run_end(map: &YearDayMap, mut i: usize) -> usize {
    while i + 1 < map.len() && map.is_free_at(i + 1) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bridgeday_calendar::CalendarDate;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn holiday(s: &str, name: &str) -> Holiday {
        Holiday::federal(date(s), name)
    }

    #[test]
    fn zero_max_bridge_is_rejected() {
        assert_eq!(
            find_bridge_opportunities(2025, &[], 0).unwrap_err(),
            OptimizerError::InvalidMaxBridgeDays { value: 0 }
        );
    }

    #[test]
    fn christmas_thursday_bridges_friday() {
        // 2025-12-25 is a Thursday; one leave day on Friday joins the weekend.
        let found =
            find_bridge_opportunities(2025, &[holiday("2025-12-25", "Christmas Day")], 5).unwrap();
        let christmas = found
            .iter()
            .find(|o| o.start_date() == date("2025-12-25"))
            .unwrap();
        assert_eq!(christmas.end_date(), date("2025-12-28"));
        assert_eq!(christmas.leave_days_needed(), 1);
        assert_eq!(christmas.total_days_off(), 4);
        assert!(christmas.efficiency() >= 2.0);
        assert_eq!(christmas.holiday_names(), ["Christmas Day"]);
    }

    #[test]
    fn plain_weekends_need_a_full_week() {
        // Joining two plain weekends takes a full working week: 9 days for 5.
        let found = find_bridge_opportunities(2025, &[], 5).unwrap();
        assert!(!found.is_empty());
        for o in &found {
            assert_eq!(o.leave_days_needed(), 5);
            assert_eq!(o.total_days_off(), 9);
        }
    }

    #[test]
    fn short_max_bridge_finds_nothing_without_holidays() {
        let found = find_bridge_opportunities(2025, &[], 4).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn one_attempt_per_free_day() {
        // Each weekend day seeds one search and both days of a weekend find
        // the same span.
        let found = find_bridge_opportunities(2025, &[], 5).unwrap();
        let jan_4 = found
            .iter()
            .filter(|o| o.start_date() == date("2025-01-04"))
            .count();
        assert_eq!(jan_4, 2);
    }

    #[test]
    fn spans_stay_inside_year() {
        let holidays = [
            holiday("2025-01-01", "New Year's Day"),
            holiday("2025-12-31", "New Year's Eve"),
        ];
        for o in find_bridge_opportunities(2025, &holidays, 5).unwrap() {
            assert_eq!(o.start_date().year(), 2025);
            assert_eq!(o.end_date().year(), 2025);
        }
    }

    #[test]
    fn tuesday_holiday_bridges_monday() {
        // 2025-11-11 is a Tuesday; Monday joins it to the weekend before.
        let found =
            find_bridge_opportunities(2025, &[holiday("2025-11-11", "Veterans Day")], 5).unwrap();
        let vet = found
            .iter()
            .find(|o| o.holiday_names().contains(&"Veterans Day".to_string()))
            .unwrap();
        assert_eq!(vet.start_date(), date("2025-11-08"));
        assert_eq!(vet.end_date(), date("2025-11-11"));
        assert_eq!(vet.leave_days_needed(), 1);
    }

    fn carnival_and_closure(last_closed_day: u32) -> Vec<Holiday> {
        let mut holidays = vec![holiday("2025-03-04", "Carnival")];
        for day in 10..=last_closed_day {
            holidays.push(holiday(&format!("2025-03-{day}"), "Closure"));
        }
        holidays
    }

    #[test]
    fn free_day_inside_bridge_is_still_charged() {
        // 2025-03-04 is a Tuesday. From the weekend of 03-01 the one-day
        // bridge to it (4 for 1) beats the five-day bridge over it into the
        // closed week (17 for 5).
        let found = find_bridge_opportunities(2025, &carnival_and_closure(17), 5).unwrap();
        let from_weekend = found
            .iter()
            .find(|o| o.start_date() == date("2025-03-01"))
            .unwrap();
        assert_eq!(from_weekend.end_date(), date("2025-03-04"));
        assert_eq!(from_weekend.leave_days_needed(), 1);
    }

    #[test]
    fn long_bridge_over_a_holiday_costs_its_full_length() {
        // With the closure running to 03-21 the free run reaches 03-23, so
        // the five-day bridge wins at 23 for 5.
        let found = find_bridge_opportunities(2025, &carnival_and_closure(21), 5).unwrap();
        let from_weekend = found
            .iter()
            .find(|o| o.start_date() == date("2025-03-01"))
            .unwrap();
        assert_eq!(from_weekend.end_date(), date("2025-03-23"));
        assert_eq!(from_weekend.total_days_off(), 23);
        assert_eq!(from_weekend.leave_days_needed(), 5);
        assert_relative_eq!(from_weekend.efficiency(), 4.6);
    }

    #[test]
    fn all_opportunities_beat_one_to_one() {
        let holidays = [
            holiday("2025-05-26", "Memorial Day"),
            holiday("2025-07-04", "Independence Day"),
            holiday("2025-11-27", "Thanksgiving"),
        ];
        for o in find_bridge_opportunities(2025, &holidays, 5).unwrap() {
            assert!(o.efficiency() > 1.0);
            assert!(o.leave_days_needed() >= 1);
            assert!(o.start_date() <= o.end_date());
        }
    }
}

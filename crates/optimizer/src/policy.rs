//! Ordering strategies for the greedy allocator.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;
use crate::opportunity::BridgeOpportunity;

/// Opportunities needing at most this many leave days count as short breaks.
pub const SHORT_BREAK_MAX_LEAVE_DAYS: u32 = 2;

/// Opportunities of at least this many days off count as long vacations.
pub const LONG_VACATION_MIN_DAYS: u32 = 7;

/// Order in which the allocator considers opportunities.
///
/// Every policy falls back to efficiency (highest first) within its
/// preferred group. Sorting is stable, so full ties keep their input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Highest days-off-per-leave-day first.
    #[default]
    MaximizeEfficiency,
    /// Opportunities needing at most [`SHORT_BREAK_MAX_LEAVE_DAYS`] first.
    PreferShortBreaks,
    /// Opportunities of at least [`LONG_VACATION_MIN_DAYS`] days first.
    PreferLongVacations,
}

impl SelectionPolicy {
    /// All policies.
    pub const ALL: [SelectionPolicy; 3] = [
        SelectionPolicy::MaximizeEfficiency,
        SelectionPolicy::PreferShortBreaks,
        SelectionPolicy::PreferLongVacations,
    ];

    /// Maps the pair of boolean preference flags onto a policy.
    ///
    /// Short breaks take precedence when both flags are set.
    pub fn from_flags(prefer_short_breaks: bool, prefer_long_vacations: bool) -> Self {
        if prefer_short_breaks {
            SelectionPolicy::PreferShortBreaks
        } else if prefer_long_vacations {
            SelectionPolicy::PreferLongVacations
        } else {
            SelectionPolicy::MaximizeEfficiency
        }
    }

    /// Returns the short name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            SelectionPolicy::MaximizeEfficiency => "efficiency",
            SelectionPolicy::PreferShortBreaks => "short",
            SelectionPolicy::PreferLongVacations => "long",
        }
    }

    /// Compares two opportunities; `Less` means `a` is considered first.
    pub fn compare(self, a: &BridgeOpportunity, b: &BridgeOpportunity) -> Ordering {
        let by_efficiency = b.efficiency().total_cmp(&a.efficiency());
        match self {
            SelectionPolicy::MaximizeEfficiency => by_efficiency,
            SelectionPolicy::PreferShortBreaks => is_short_break(b)
                .cmp(&is_short_break(a))
                .then(by_efficiency),
            SelectionPolicy::PreferLongVacations => is_long_vacation(b)
                .cmp(&is_long_vacation(a))
                .then(by_efficiency),
        }
    }

    /// Stably sorts `opportunities` into consideration order.
    pub fn sort(self, opportunities: &mut [BridgeOpportunity]) {
        opportunities.sort_by(|a, b| self.compare(a, b));
    }
}

fn is_short_break(opp: &BridgeOpportunity) -> bool {
    opp.leave_days_needed() <= SHORT_BREAK_MAX_LEAVE_DAYS
}

fn is_long_vacation(opp: &BridgeOpportunity) -> bool {
    opp.total_days_off() >= LONG_VACATION_MIN_DAYS
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionPolicy {
    type Err = OptimizerError;

    /// Parses `efficiency`, `short` or `long` (case-insensitive). The long
    /// variant names in snake or kebab case are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "efficiency" | "default" | "maximize_efficiency" => {
                Ok(SelectionPolicy::MaximizeEfficiency)
            }
            "short" | "prefer_short_breaks" => Ok(SelectionPolicy::PreferShortBreaks),
            "long" | "prefer_long_vacations" => Ok(SelectionPolicy::PreferLongVacations),
            _ => Err(OptimizerError::UnknownPolicy {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgeday_calendar::CalendarDate;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn opp(start: &str, end: &str, leave: u32, total: u32) -> BridgeOpportunity {
        BridgeOpportunity::new(date(start), date(end), leave, total, vec![])
    }

    fn sample() -> Vec<BridgeOpportunity> {
        vec![
            // Long but expensive: 9 days for 3 leave days.
            opp("2025-11-22", "2025-11-30", 3, 9),
            // Short and cheap: 4 days for 1 leave day.
            opp("2025-12-25", "2025-12-28", 1, 4),
            // Long and very expensive: 9 days for 5 leave days.
            opp("2025-01-04", "2025-01-12", 5, 9),
        ]
    }

    fn starts(opps: &[BridgeOpportunity]) -> Vec<String> {
        opps.iter().map(|o| o.start_date().to_string()).collect()
    }

    #[test]
    fn default_is_efficiency() {
        assert_eq!(
            SelectionPolicy::default(),
            SelectionPolicy::MaximizeEfficiency
        );
    }

    #[test]
    fn from_flags() {
        assert_eq!(
            SelectionPolicy::from_flags(false, false),
            SelectionPolicy::MaximizeEfficiency
        );
        assert_eq!(
            SelectionPolicy::from_flags(true, false),
            SelectionPolicy::PreferShortBreaks
        );
        assert_eq!(
            SelectionPolicy::from_flags(false, true),
            SelectionPolicy::PreferLongVacations
        );
        assert_eq!(
            SelectionPolicy::from_flags(true, true),
            SelectionPolicy::PreferShortBreaks
        );
    }

    #[test]
    fn efficiency_order() {
        let mut opps = sample();
        SelectionPolicy::MaximizeEfficiency.sort(&mut opps);
        assert_eq!(starts(&opps), ["2025-12-25", "2025-11-22", "2025-01-04"]);
    }

    #[test]
    fn short_breaks_first() {
        let mut opps = vec![
            opp("2025-11-22", "2025-11-30", 3, 9),
            opp("2025-07-04", "2025-07-06", 1, 3),
        ];
        SelectionPolicy::PreferShortBreaks.sort(&mut opps);
        assert_eq!(starts(&opps), ["2025-07-04", "2025-11-22"]);
    }

    #[test]
    fn long_vacations_first() {
        let mut opps = sample();
        SelectionPolicy::PreferLongVacations.sort(&mut opps);
        assert_eq!(starts(&opps), ["2025-11-22", "2025-01-04", "2025-12-25"]);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let two_leave = opp("2025-05-03", "2025-05-11", 2, 9);
        let three_leave = opp("2025-05-17", "2025-05-26", 3, 10);
        assert_eq!(
            SelectionPolicy::PreferShortBreaks.compare(&two_leave, &three_leave),
            Ordering::Less
        );

        let seven = opp("2025-04-12", "2025-04-18", 5, 7);
        let six = opp("2025-12-25", "2025-12-30", 2, 6);
        assert_eq!(
            SelectionPolicy::PreferLongVacations.compare(&seven, &six),
            Ordering::Less
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!(
            "efficiency".parse::<SelectionPolicy>().unwrap(),
            SelectionPolicy::MaximizeEfficiency
        );
        assert_eq!(
            " Short ".parse::<SelectionPolicy>().unwrap(),
            SelectionPolicy::PreferShortBreaks
        );
        assert_eq!(
            "prefer-long-vacations".parse::<SelectionPolicy>().unwrap(),
            SelectionPolicy::PreferLongVacations
        );
        assert!(matches!(
            "random".parse::<SelectionPolicy>(),
            Err(OptimizerError::UnknownPolicy { .. })
        ));
    }

    #[test]
    fn name_roundtrip() {
        for policy in SelectionPolicy::ALL {
            assert_eq!(
                policy.to_string().parse::<SelectionPolicy>().unwrap(),
                policy
            );
        }
    }
}

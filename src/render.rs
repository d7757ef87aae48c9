//! Plain-text rendering of command output.

use bridgeday_holidays::{Holiday, Region};
use bridgeday_optimizer::{BridgeOpportunity, OptimizationResult, VacationPeriod};

/// Renders a plan: header, synopsis, then one line per period.
pub fn plan(region: Region, year: i32, result: &OptimizationResult) -> String {
    let mut lines = vec![
        format!(
            "{} ({}) {year}: {} leave days available",
            region.name(),
            region.code(),
            result.available_leave_days()
        ),
        result.summary().to_string(),
    ];
    if !result.periods().is_empty() {
        lines.push(String::new());
        lines.extend(result.periods().iter().map(period_line));
    }
    lines.join("\n")
}

fn period_line(p: &VacationPeriod) -> String {
    let mut line = format!(
        "  {} .. {}  {:>2} days off  {:>2} leave  {:.2}x",
        p.start_date(),
        p.end_date(),
        p.total_days(),
        p.leave_days_used(),
        p.efficiency()
    );
    if !p.holiday_names().is_empty() {
        line.push_str("  ");
        line.push_str(&p.holiday_names().join(", "));
    }
    line
}

/// Renders opportunities in the order given.
pub fn opportunities(opps: &[BridgeOpportunity]) -> String {
    if opps.is_empty() {
        return "No bridge opportunities found.".to_string();
    }
    opps.iter()
        .map(|o| {
            let mut line = format!(
                "{} .. {}  {:>2} days off  {:>2} leave  {:.2}x",
                o.start_date(),
                o.end_date(),
                o.total_days_off(),
                o.leave_days_needed(),
                o.efficiency()
            );
            if !o.holiday_names().is_empty() {
                line.push_str("  ");
                line.push_str(&o.holiday_names().join(", "));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a holiday list, one per line with its weekday.
pub fn holidays(holidays: &[Holiday]) -> String {
    holidays
        .iter()
        .map(|h| {
            format!(
                "{}  {}  {}  ({})",
                h.date,
                h.date.weekday().short_name(),
                h.name,
                h.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a region comparison table, in the order given.
pub fn comparison(year: i32, rows: &[(Region, OptimizationResult)]) -> String {
    let header = format!("{year}: region, days off, leave used, efficiency, periods");
    let mut lines = vec![header];
    lines.extend(rows.iter().map(|(region, r)| {
        format!(
            "  {:<3} {:>4} {:>4} {:>6.2} {:>3}",
            region.code(),
            r.total_days_off(),
            r.leave_days_used(),
            r.efficiency(),
            r.periods().len()
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgeday_holidays::holidays_for_region;
    use bridgeday_optimizer::{OptimizerConfig, find_bridge_opportunities, optimize_leave_plan};

    fn us_plan(days: i64) -> OptimizationResult {
        let holidays = holidays_for_region(Region::UnitedStates, 2025).unwrap();
        optimize_leave_plan(2025, &holidays, days, &OptimizerConfig::new()).unwrap()
    }

    #[test]
    fn plan_lists_periods() {
        let text = plan(Region::UnitedStates, 2025, &us_plan(4));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "United States (US) 2025: 4 leave days available");
        assert!(lines[1].starts_with("Using 4 leave days"));
        assert_eq!(
            lines.last().copied(),
            Some("  2025-12-25 .. 2025-12-28   4 days off   1 leave  4.00x  Christmas Day")
        );
    }

    #[test]
    fn empty_plan_has_no_period_lines() {
        let text = plan(Region::UnitedStates, 2025, &us_plan(0));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn opportunity_lines() {
        let christmas = Holiday::federal("2025-12-25".parse().unwrap(), "Christmas Day");
        let opps = find_bridge_opportunities(2025, &[christmas], 1).unwrap();
        let text = opportunities(&opps);
        let row = "2025-12-25 .. 2025-12-28   4 days off   1 leave  4.00x  Christmas Day";
        assert!(text.contains(row));
        assert_eq!(opportunities(&[]), "No bridge opportunities found.");
    }

    #[test]
    fn holiday_lines() {
        let list = holidays_for_region(Region::UnitedStates, 2025).unwrap();
        let text = holidays(&list);
        assert_eq!(
            text.lines().next(),
            Some("2025-01-01  Wed  New Year's Day  (federal)")
        );
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn comparison_rows() {
        let text = comparison(2025, &[(Region::UnitedStates, us_plan(4))]);
        assert_eq!(text.lines().nth(1), Some("  US    16    4   4.00   4"));
    }
}

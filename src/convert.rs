//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use tracing::debug;

use bridgeday_calendar::CalendarDate;
use bridgeday_holidays::{Holiday, HolidayCategory, Region, holidays_for_region};
use bridgeday_optimizer::{OptimizerConfig, SelectionPolicy};

use crate::config::{ExtraHolidayToml, PlanToml};

/// Parses a region code into the corresponding enum variant.
pub fn parse_region(s: &str) -> Result<Region> {
    s.parse::<Region>().context("invalid region")
}

/// Parses a selection policy name into the corresponding enum variant.
pub fn parse_policy(s: &str) -> Result<SelectionPolicy> {
    s.parse::<SelectionPolicy>().context("invalid policy")
}

/// Parses a holiday category name into the corresponding enum variant.
pub fn parse_category(s: &str) -> Result<HolidayCategory> {
    match s.to_lowercase().as_str() {
        "federal" => Ok(HolidayCategory::Federal),
        "state" => Ok(HolidayCategory::State),
        "observed" => Ok(HolidayCategory::Observed),
        other => bail!("unknown holiday category: {other:?}"),
    }
}

/// Returns the configured year, or the current calendar year.
pub fn plan_year(plan: &PlanToml) -> i32 {
    plan.year.unwrap_or_else(|| chrono::Local::now().year())
}

/// Builds an [`OptimizerConfig`] from the TOML plan configuration.
pub fn build_optimizer_config(plan: &PlanToml) -> Result<OptimizerConfig> {
    let cfg = OptimizerConfig::new()
        .with_policy(parse_policy(&plan.policy)?)
        .with_max_consecutive_days(plan.max_consecutive_days)
        .with_max_bridge_days(plan.max_bridge_days);
    cfg.validate().context("invalid [plan] settings")?;
    Ok(cfg)
}

/// Converts `[[holidays.extra]]` entries that fall in `year` into holidays.
///
/// Entries for other years are skipped, so one file can carry several years
/// of company closures.
pub fn build_extra_holidays(extra: &[ExtraHolidayToml], year: i32) -> Result<Vec<Holiday>> {
    let mut holidays = Vec::new();
    for entry in extra {
        let date: CalendarDate = entry
            .date
            .parse()
            .with_context(|| format!("invalid date for extra holiday {:?}", entry.name))?;
        if entry.name.trim().is_empty() {
            bail!("extra holiday on {date} has an empty name");
        }
        if date.year() != year {
            debug!(
                %date,
                name = %entry.name,
                year,
                "skipping extra holiday outside year"
            );
            continue;
        }
        let category = match entry.category {
            Some(ref c) => parse_category(c)?,
            None => HolidayCategory::Observed,
        };
        holidays.push(Holiday::new(date, entry.name.clone(), category));
    }
    Ok(holidays)
}

/// Returns the regional holidays of `year` followed by the configured extras,
/// sorted by date.
///
/// The sort is stable, so an extra entry sharing a date with a regional
/// holiday comes second and its name wins in the day map.
pub fn build_holiday_list(
    region: Region,
    year: i32,
    extra: &[ExtraHolidayToml],
) -> Result<Vec<Holiday>> {
    let mut holidays = holidays_for_region(region, year)
        .with_context(|| format!("failed to resolve holidays for {region} {year}"))?;
    holidays.extend(build_extra_holidays(extra, year)?);
    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra(date: &str, name: &str, category: Option<&str>) -> ExtraHolidayToml {
        ExtraHolidayToml {
            date: date.to_string(),
            name: name.to_string(),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn parse_region_codes() {
        assert_eq!(parse_region("us").unwrap(), Region::UnitedStates);
        assert_eq!(parse_region("GB").unwrap(), Region::UnitedKingdom);
        assert!(parse_region("XX").is_err());
    }

    #[test]
    fn parse_policies() {
        assert_eq!(
            parse_policy("short").unwrap(),
            SelectionPolicy::PreferShortBreaks
        );
        assert!(parse_policy("fastest").is_err());
    }

    #[test]
    fn parse_categories() {
        assert_eq!(parse_category("State").unwrap(), HolidayCategory::State);
        assert!(parse_category("company").is_err());
    }

    #[test]
    fn optimizer_config_from_plan() {
        let plan = PlanToml {
            policy: "long".into(),
            max_consecutive_days: 9,
            max_bridge_days: 2,
            ..PlanToml::default()
        };
        let cfg = build_optimizer_config(&plan).unwrap();
        assert_eq!(cfg.policy(), SelectionPolicy::PreferLongVacations);
        assert_eq!(cfg.max_consecutive_days(), 9);
        assert_eq!(cfg.max_bridge_days(), 2);
    }

    #[test]
    fn optimizer_config_rejects_zero_limits() {
        let plan = PlanToml {
            max_bridge_days: 0,
            ..PlanToml::default()
        };
        assert!(build_optimizer_config(&plan).is_err());
    }

    #[test]
    fn plan_year_prefers_config() {
        let plan = PlanToml {
            year: Some(2031),
            ..PlanToml::default()
        };
        assert_eq!(plan_year(&plan), 2031);
        assert!(plan_year(&PlanToml::default()) >= 2024);
    }

    #[test]
    fn extras_filtered_by_year() {
        let entries = [
            extra("2025-12-24", "Christmas Eve", None),
            extra("2026-12-24", "Christmas Eve", None),
            extra("2025-12-31", "New Year's Eve", Some("state")),
        ];
        let holidays = build_extra_holidays(&entries, 2025).unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].category, HolidayCategory::Observed);
        assert_eq!(holidays[1].category, HolidayCategory::State);
    }

    #[test]
    fn extras_must_be_valid() {
        assert!(build_extra_holidays(&[extra("2025-13-01", "Bad", None)], 2025).is_err());
        assert!(build_extra_holidays(&[extra("2025-12-24", " ", None)], 2025).is_err());
        assert!(build_extra_holidays(&[extra("2025-12-24", "Eve", Some("x"))], 2025).is_err());
    }

    #[test]
    fn holiday_list_merges_and_sorts() {
        let entries = [extra("2025-12-24", "Christmas Eve", None)];
        let holidays = build_holiday_list(Region::UnitedStates, 2025, &entries).unwrap();
        assert_eq!(holidays.len(), 12);
        assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date));
        let eve = holidays
            .iter()
            .position(|h| h.name == "Christmas Eve")
            .unwrap();
        assert_eq!(holidays[eve + 1].name, "Christmas Day");
    }
}

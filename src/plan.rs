//! Merges the config file and command-line flags into optimizer inputs.

use anyhow::Result;
use tracing::info;

use bridgeday_holidays::{Holiday, Region};
use bridgeday_optimizer::OptimizerConfig;

use crate::cli::{SourceArgs, TuningArgs};
use crate::config::BridgedayConfig;
use crate::convert;

/// Everything a single-region command needs.
#[derive(Debug)]
pub struct PlanInputs {
    pub region: Region,
    pub year: i32,
    pub leave_days: i64,
    pub optimizer: OptimizerConfig,
    pub holidays: Vec<Holiday>,
}

/// Loads the config named by `source`, applies the flags and resolves the
/// holiday list.
pub fn resolve(source: &SourceArgs, tuning: Option<&TuningArgs>) -> Result<PlanInputs> {
    let mut config = BridgedayConfig::load(source.config.as_deref())?;
    source.apply(&mut config.plan);
    if let Some(tuning) = tuning {
        tuning.apply(&mut config.plan);
    }
    from_config(&config)
}

/// Resolves a fully merged configuration.
pub fn from_config(config: &BridgedayConfig) -> Result<PlanInputs> {
    let region = convert::parse_region(&config.plan.region)?;
    let year = convert::plan_year(&config.plan);
    let optimizer = convert::build_optimizer_config(&config.plan)?;
    let holidays = convert::build_holiday_list(region, year, &config.holidays.extra)?;
    info!(
        region = %region,
        year,
        leave_days = config.plan.leave_days,
        n_holidays = holidays.len(),
        policy = %optimizer.policy(),
        "plan inputs resolved"
    );
    Ok(PlanInputs {
        region,
        year,
        leave_days: config.plan.leave_days,
        optimizer,
        holidays,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use bridgeday_optimizer::SelectionPolicy;

    fn source(config: Option<std::path::PathBuf>, region: Option<&str>) -> SourceArgs {
        SourceArgs {
            config,
            region: region.map(str::to_string),
            year: Some(2025),
        }
    }

    #[test]
    fn defaults_without_config_file() {
        let inputs = resolve(&source(None, None), None).unwrap();
        assert_eq!(inputs.region, Region::UnitedStates);
        assert_eq!(inputs.year, 2025);
        assert_eq!(inputs.leave_days, 15);
        assert_eq!(inputs.holidays.len(), 11);
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[plan]
region = "DE"
leave_days = 30
policy = "short"

[[holidays.extra]]
date = "2025-12-24"
name = "Heiligabend"
"#
        )
        .unwrap();
        let tuning = TuningArgs {
            days: Some(10),
            policy: None,
            max_consecutive: None,
            max_bridge: None,
        };
        let inputs = resolve(
            &source(Some(file.path().to_path_buf()), Some("FR")),
            Some(&tuning),
        )
        .unwrap();
        assert_eq!(inputs.region, Region::France);
        assert_eq!(inputs.leave_days, 10);
        assert_eq!(
            inputs.optimizer.policy(),
            SelectionPolicy::PreferShortBreaks
        );
        assert!(inputs.holidays.iter().any(|h| h.name == "Heiligabend"));
    }

    #[test]
    fn unknown_region_fails() {
        let err = resolve(&source(None, Some("ZZ")), None).unwrap_err();
        assert!(format!("{err:#}").contains("unknown region code"));
    }
}

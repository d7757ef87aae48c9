use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level bridgeday configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgedayConfig {
    /// Plan settings.
    #[serde(default)]
    pub plan: PlanToml,

    /// Holiday list additions.
    #[serde(default)]
    pub holidays: HolidaysToml,
}

impl BridgedayConfig {
    /// Reads the TOML file at `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default = "default_leave_days")]
    pub leave_days: i64,
    #[serde(default = "default_policy")]
    pub policy: String,
    #[serde(default = "default_max_consecutive_days")]
    pub max_consecutive_days: u32,
    #[serde(default = "default_max_bridge_days")]
    pub max_bridge_days: u32,
}

impl Default for PlanToml {
    fn default() -> Self {
        Self {
            region: default_region(),
            year: None,
            leave_days: default_leave_days(),
            policy: default_policy(),
            max_consecutive_days: default_max_consecutive_days(),
            max_bridge_days: default_max_bridge_days(),
        }
    }
}

fn default_region() -> String {
    "US".to_string()
}
fn default_leave_days() -> i64 {
    15
}
fn default_policy() -> String {
    "efficiency".to_string()
}
fn default_max_consecutive_days() -> u32 {
    bridgeday_optimizer::DEFAULT_MAX_CONSECUTIVE_DAYS
}
fn default_max_bridge_days() -> u32 {
    bridgeday_optimizer::DEFAULT_MAX_BRIDGE_DAYS
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    /// Company closures and other days off added to the regional list.
    #[serde(default)]
    pub extra: Vec<ExtraHolidayToml>,
}

/// One `[[holidays.extra]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraHolidayToml {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub name: String,
    /// `federal`, `state` or `observed` (default `observed`).
    #[serde(default)]
    pub category: Option<String>,
}

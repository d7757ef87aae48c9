use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::PlanToml;

/// Bridgeday leave planner.
#[derive(Parser)]
#[command(
    name = "bridgeday",
    version,
    about = "Plan leave days around weekends and public holidays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Plan leave for one region and print the result.
    Optimize(OptimizeArgs),
    /// Plan leave and write the annotated day-by-day calendar as JSON.
    Calendar(CalendarArgs),
    /// List the bridge opportunities of a year.
    Opportunities(OpportunitiesArgs),
    /// List the holidays the planner works with.
    Holidays(HolidaysArgs),
    /// Plan the same budget for several regions and compare totals.
    Compare(CompareArgs),
}

/// Where holidays come from: config file, region and year.
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Region code (US, DE, UK, CA, AU, FR). Overrides `[plan].region`.
    #[arg(short, long)]
    pub region: Option<String>,

    /// Target year. Overrides `[plan].year`; defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,
}

impl SourceArgs {
    /// Writes the flags that were given into the `[plan]` section.
    pub fn apply(&self, plan: &mut PlanToml) {
        if let Some(ref region) = self.region {
            plan.region = region.clone();
        }
        if let Some(year) = self.year {
            plan.year = Some(year);
        }
    }
}

/// Budget and optimizer knobs.
#[derive(clap::Args)]
pub struct TuningArgs {
    /// Leave days available. Overrides `[plan].leave_days`.
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Selection policy: efficiency, short or long. Overrides `[plan].policy`.
    #[arg(short, long)]
    pub policy: Option<String>,

    /// Longest single period in days. Overrides `[plan].max_consecutive_days`.
    #[arg(long = "max-consecutive")]
    pub max_consecutive: Option<u32>,

    /// Longest bridge in leave days. Overrides `[plan].max_bridge_days`.
    #[arg(long = "max-bridge")]
    pub max_bridge: Option<u32>,
}

impl TuningArgs {
    /// Writes the flags that were given into the `[plan]` section.
    pub fn apply(&self, plan: &mut PlanToml) {
        if let Some(days) = self.days {
            plan.leave_days = days;
        }
        if let Some(ref policy) = self.policy {
            plan.policy = policy.clone();
        }
        if let Some(days) = self.max_consecutive {
            plan.max_consecutive_days = days;
        }
        if let Some(days) = self.max_bridge {
            plan.max_bridge_days = days;
        }
    }
}

/// Arguments for the `optimize` subcommand.
#[derive(clap::Args)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Output JSON path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `opportunities` subcommand.
#[derive(clap::Args)]
pub struct OpportunitiesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Longest bridge in leave days. Overrides `[plan].max_bridge_days`.
    #[arg(long = "max-bridge")]
    pub max_bridge: Option<u32>,

    /// List every search result, duplicates and overlaps included.
    #[arg(long)]
    pub raw: bool,

    /// Print as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `compare` subcommand.
#[derive(clap::Args)]
pub struct CompareArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target year. Overrides `[plan].year`; defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Comma-separated region codes (all supported regions if omitted).
    #[arg(long, value_delimiter = ',')]
    pub regions: Vec<String>,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Print as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

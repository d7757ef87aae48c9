//! Opportunities command: list bridge opportunities for a year.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bridgeday_optimizer::{deduplicate_opportunities, find_bridge_opportunities};

use crate::cli::OpportunitiesArgs;
use crate::config::BridgedayConfig;
use crate::convert;
use crate::render;

/// Run the bridge search and print its results, deduplicated unless `--raw`.
pub fn run(args: OpportunitiesArgs) -> Result<()> {
    let _cmd = info_span!("opportunities").entered();
    let mut config = BridgedayConfig::load(args.source.config.as_deref())?;
    args.source.apply(&mut config.plan);
    if let Some(days) = args.max_bridge {
        config.plan.max_bridge_days = days;
    }

    let region = convert::parse_region(&config.plan.region)?;
    let year = convert::plan_year(&config.plan);
    let holidays = convert::build_holiday_list(region, year, &config.holidays.extra)?;

    let mut opps = find_bridge_opportunities(year, &holidays, config.plan.max_bridge_days)
        .with_context(|| format!("bridge search failed for {region} {year}"))?;
    if !args.raw {
        opps = deduplicate_opportunities(opps);
    }
    info!(n = opps.len(), raw = args.raw, "opportunities found");

    if args.json {
        let json =
            serde_json::to_string_pretty(&opps).context("failed to serialize opportunities")?;
        println!("{json}");
    } else {
        println!("{}", render::opportunities(&opps));
    }
    Ok(())
}

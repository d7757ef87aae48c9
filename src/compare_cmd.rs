//! Compare command: plan the same budget for several regions.

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{info, info_span};

use bridgeday_holidays::Region;
use bridgeday_optimizer::{OptimizationResult, optimize_leave_plan};

use crate::cli::CompareArgs;
use crate::config::BridgedayConfig;
use crate::convert;
use crate::render;

/// Resolves `--regions`, or every supported region when none are given.
fn regions(codes: &[String]) -> Result<Vec<Region>> {
    if codes.is_empty() {
        return Ok(Region::ALL.to_vec());
    }
    let mut regions = Vec::with_capacity(codes.len());
    for code in codes {
        let region = convert::parse_region(code)?;
        if !regions.contains(&region) {
            regions.push(region);
        }
    }
    Ok(regions)
}

/// Orders results by total days off, most first; ties keep input order.
fn rank(results: &mut [(Region, OptimizationResult)]) {
    results.sort_by(|a, b| b.1.total_days_off().cmp(&a.1.total_days_off()));
}

/// Run the optimizer once per region in parallel and print a ranking.
pub fn run(args: CompareArgs) -> Result<()> {
    let _cmd = info_span!("compare").entered();
    let mut config = BridgedayConfig::load(args.config.as_deref())?;
    if let Some(year) = args.year {
        config.plan.year = Some(year);
    }
    args.tuning.apply(&mut config.plan);

    let year = convert::plan_year(&config.plan);
    let optimizer = convert::build_optimizer_config(&config.plan)?;
    let regions = regions(&args.regions)?;
    let leave_days = config.plan.leave_days;
    let extra = &config.holidays.extra;
    info!(
        year,
        n_regions = regions.len(),
        leave_days,
        "comparing regions"
    );

    let mut results = regions
        .par_iter()
        .map(|&region| {
            let holidays = convert::build_holiday_list(region, year, extra)?;
            let result = optimize_leave_plan(year, &holidays, leave_days, &optimizer)
                .with_context(|| format!("failed to plan leave for {region} {year}"))?;
            Ok::<_, anyhow::Error>((region, result))
        })
        .collect::<Result<Vec<_>>>()?;
    rank(&mut results);

    if args.json {
        let rows: Vec<serde_json::Value> = results
            .iter()
            .map(|(region, result)| {
                serde_json::json!({
                    "region": region.code(),
                    "result": result,
                })
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows).context("failed to serialize comparison")?;
        println!("{json}");
    } else {
        println!("{}", render::comparison(year, &results));
    }
    Ok(())
}

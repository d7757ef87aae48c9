//! Optimize command: plan leave for one region and print the result.

use anyhow::{Context, Result};
use tracing::info_span;

use bridgeday_optimizer::optimize_leave_plan;

use crate::cli::OptimizeArgs;
use crate::plan;
use crate::render;

/// Run the optimizer and print the plan as text or JSON.
pub fn run(args: OptimizeArgs) -> Result<()> {
    let _cmd = info_span!("optimize").entered();
    let inputs = plan::resolve(&args.source, Some(&args.tuning))?;
    let (region, year) = (inputs.region, inputs.year);

    let result = optimize_leave_plan(year, &inputs.holidays, inputs.leave_days, &inputs.optimizer)
        .with_context(|| format!("failed to plan leave for {region} {year}"))?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize plan")?;
        println!("{json}");
    } else {
        println!("{}", render::plan(region, year, &result));
    }
    Ok(())
}

//! Calendar command: write the annotated day-by-day calendar as JSON.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bridgeday_optimizer::{materialize_calendar, optimize_leave_plan};

use crate::cli::CalendarArgs;
use crate::plan;

/// Run the optimizer and write every day of the year with its leave flags.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let inputs = plan::resolve(&args.source, Some(&args.tuning))?;
    let (region, year) = (inputs.region, inputs.year);

    let result = optimize_leave_plan(year, &inputs.holidays, inputs.leave_days, &inputs.optimizer)
        .with_context(|| format!("failed to plan leave for {region} {year}"))?;
    let days = materialize_calendar(year, &inputs.holidays, &result)
        .context("failed to build calendar")?;

    let json = serde_json::to_string_pretty(&days).context("failed to serialize calendar")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write calendar: {}", path.display()))?;
            info!(
                path = %path.display(),
                n_days = days.len(),
                "calendar written"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

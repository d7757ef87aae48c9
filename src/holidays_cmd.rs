//! Holidays command: list the holidays a plan would use.

use anyhow::{Context, Result};
use tracing::info_span;

use crate::cli::HolidaysArgs;
use crate::plan;
use crate::render;

/// Print the regional holidays plus configured extras for the year.
pub fn run(args: HolidaysArgs) -> Result<()> {
    let _cmd = info_span!("holidays").entered();
    let inputs = plan::resolve(&args.source, None)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&inputs.holidays).context("failed to serialize holidays")?;
        println!("{json}");
    } else {
        println!("{}", render::holidays(&inputs.holidays));
    }
    Ok(())
}

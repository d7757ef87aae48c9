mod calendar_cmd;
mod cli;
mod compare_cmd;
mod config;
mod convert;
mod holidays_cmd;
mod logging;
mod opportunities_cmd;
mod optimize_cmd;
mod plan;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Optimize(args) => optimize_cmd::run(args),
        Command::Calendar(args) => calendar_cmd::run(args),
        Command::Opportunities(args) => opportunities_cmd::run(args),
        Command::Holidays(args) => holidays_cmd::run(args),
        Command::Compare(args) => compare_cmd::run(args),
    }
}

use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown; dependencies stay silent.
const CRATE_TARGETS: &[&str] = &[
    "bridgeday",
    "bridgeday_calendar",
    "bridgeday_holidays",
    "bridgeday_optimizer",
];

/// Maps the `-v` count to a level: none warn, `-v` info, `-vv` debug,
/// anything more trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives applying the level to every workspace crate.
fn directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr, keeping stdout for command output.
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use clap::ArgMatches;
use tracing::Level;

/// Map the `-v` count to a tracing level; errors are always logged.
const fn level_for_count(count: u8) -> Level {
    match count {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `--log-level` (or `USERDESK_LOG_LEVEL`) wins over repeated `-v`.
fn log_level(matches: &ArgMatches) -> Level {
    matches
        .get_one::<Level>(commands::ARG_LOG_LEVEL)
        .copied()
        .unwrap_or_else(|| level_for_count(matches.get_count(commands::ARG_VERBOSE)))
}

/// Main entry point for the CLI - builds and returns the Action
///
/// # Errors
///
/// Returns an error if telemetry initialization or action dispatch fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(log_level(&matches))?;

    dispatch::handler(&matches)
}

pub mod account;
pub mod session;
pub mod users;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};
use tracing::Level;

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_TOKEN_FILE: &str = "token-file";
pub const ARG_VERBOSE: &str = "verbose";
pub const ARG_LOG_LEVEL: &str = "log-level";

/// Accepts a level name, case-insensitive. Numeric levels are rejected.
///
/// # Errors
///
/// Returns a message listing the accepted names.
pub fn parse_log_level(level: &str) -> Result<Level, String> {
    match level.to_ascii_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(format!(
            "unknown log level `{level}` (expected error, warn, info, debug or trace)"
        )),
    }
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str =
        Box::leak(crate::app_lib::build_info::version_label().into_boxed_str());

    let command = Command::new("userdesk")
        .about("Account self-service and user administration")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long("api-base-url")
                .help("Backend base URL [default: build-time USERDESK_API_BASE_URL or http://localhost:8000]")
                .env("USERDESK_API_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN_FILE)
                .long("token-file")
                .help("File holding the bearer token [default: $HOME/.userdesk/token]")
                .env("USERDESK_TOKEN_FILE")
                .global(true),
        )
        .arg(
            Arg::new(ARG_VERBOSE)
                .short('v')
                .long("verbose")
                .help("Log more on stderr: -v warn, -vv info, -vvv debug, -vvvv trace [default: error]")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new(ARG_LOG_LEVEL)
                .long("log-level")
                .help("Log level by name, overrides -v: error, warn, info, debug, trace")
                .env("USERDESK_LOG_LEVEL")
                .value_parser(parse_log_level)
                .global(true),
        );

    let command = session::with_subcommands(command);
    let command = account::with_subcommands(command);
    users::with_subcommands(command)
}

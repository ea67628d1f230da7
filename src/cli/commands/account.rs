use clap::{Arg, Command};

pub const CMD_PROFILE: &str = "profile";
pub const CMD_PASSWORD: &str = "password";

pub const ARG_FULL_NAME: &str = "full-name";
pub const ARG_OLD_PASSWORD: &str = "old";
pub const ARG_NEW_PASSWORD: &str = "new";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_PROFILE)
                .about("Show the profile, or update the full name")
                .arg(
                    Arg::new(ARG_FULL_NAME)
                        .long("full-name")
                        .help("New full name"),
                ),
        )
        .subcommand(
            Command::new(CMD_PASSWORD)
                .about("Change the account password")
                .arg(
                    Arg::new(ARG_OLD_PASSWORD)
                        .long("old")
                        .help("Current password")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_NEW_PASSWORD)
                        .long("new")
                        .help("New password")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_CONFIRM_PASSWORD)
                        .long("confirm")
                        .help("New password again")
                        .required(true),
                ),
        )
}

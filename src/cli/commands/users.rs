use clap::{Arg, ArgAction, Command};

pub const CMD_USERS: &str = "users";
pub const CMD_LIST: &str = "list";
pub const CMD_ACTIVATE: &str = "activate";
pub const CMD_DEACTIVATE: &str = "deactivate";

pub const ARG_PAGE: &str = "page";
pub const ARG_LIMIT: &str = "limit";
pub const ARG_ID: &str = "id";
pub const ARG_YES: &str = "yes";

fn status_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(Arg::new(ARG_ID).help("User id").required(true))
        .arg(
            Arg::new(ARG_YES)
                .short('y')
                .long("yes")
                .help("Skip the confirmation prompt")
                .action(ArgAction::SetTrue),
        )
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command.subcommand(
        Command::new(CMD_USERS)
            .about("Administer user accounts (admin only)")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(
                Command::new(CMD_LIST)
                    .about("List one page of users")
                    .arg(
                        Arg::new(ARG_PAGE)
                            .long("page")
                            .help("Page number, starting at 1")
                            .default_value("1")
                            .value_parser(clap::value_parser!(u32).range(1..)),
                    )
                    .arg(
                        Arg::new(ARG_LIMIT)
                            .long("limit")
                            .help("Users per page [default: configured page size]")
                            .value_parser(clap::value_parser!(u32).range(1..)),
                    ),
            )
            .subcommand(status_command(CMD_ACTIVATE, "Activate a user account"))
            .subcommand(status_command(CMD_DEACTIVATE, "Deactivate a user account")),
    )
}

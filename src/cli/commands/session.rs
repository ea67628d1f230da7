use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_SIGNUP: &str = "signup";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_FULL_NAME: &str = "full-name";

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Account password")
        .env("USERDESK_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Log in and store the bearer token")
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(Command::new(CMD_LOGOUT).about("Forget the stored bearer token"))
        .subcommand(Command::new(CMD_WHOAMI).about("Show the signed-in user"))
        .subcommand(
            Command::new(CMD_SIGNUP)
                .about("Create an account")
                .arg(
                    Arg::new(ARG_FULL_NAME)
                        .long("full-name")
                        .help("Full name shown on the profile")
                        .required(true),
                )
                .arg(email_arg())
                .arg(password_arg()),
        )
}

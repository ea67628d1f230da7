use crate::{
    app_lib::config::AppConfig,
    cli::{
        actions::{Action, account, session, users},
        commands::{self, account as account_cmd, session as session_cmd, users as users_cmd},
        globals::{GlobalArgs, default_token_file},
    },
};
use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use std::path::PathBuf;
use url::Url;

/// # Errors
/// Returns an error if required arguments are missing or the API base URL is
/// not a valid URL.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;

    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand");
    };

    let action = match name {
        session_cmd::CMD_LOGIN => Action::Login(session::LoginArgs {
            globals,
            email: required(sub, session_cmd::ARG_EMAIL)?,
            password: SecretString::from(required(sub, session_cmd::ARG_PASSWORD)?),
        }),
        session_cmd::CMD_LOGOUT => Action::Logout(globals),
        session_cmd::CMD_WHOAMI => Action::Whoami(globals),
        session_cmd::CMD_SIGNUP => Action::Signup(session::SignupArgs {
            globals,
            full_name: required(sub, session_cmd::ARG_FULL_NAME)?,
            email: required(sub, session_cmd::ARG_EMAIL)?,
            password: SecretString::from(required(sub, session_cmd::ARG_PASSWORD)?),
        }),
        account_cmd::CMD_PROFILE => Action::Profile(account::ProfileArgs {
            globals,
            full_name: sub.get_one::<String>(account_cmd::ARG_FULL_NAME).cloned(),
        }),
        account_cmd::CMD_PASSWORD => Action::Password(account::PasswordArgs {
            globals,
            old_password: SecretString::from(required(sub, account_cmd::ARG_OLD_PASSWORD)?),
            new_password: SecretString::from(required(sub, account_cmd::ARG_NEW_PASSWORD)?),
            confirm_password: SecretString::from(required(
                sub,
                account_cmd::ARG_CONFIRM_PASSWORD,
            )?),
        }),
        users_cmd::CMD_USERS => users_action(sub, globals)?,
        other => bail!("unknown subcommand: {other}"),
    };

    Ok(action)
}

fn users_action(matches: &clap::ArgMatches, globals: GlobalArgs) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing users subcommand");
    };

    match name {
        users_cmd::CMD_LIST => {
            let page = sub.get_one::<u32>(users_cmd::ARG_PAGE).copied().unwrap_or(1);
            let limit = sub
                .get_one::<u32>(users_cmd::ARG_LIMIT)
                .copied()
                .unwrap_or(globals.page_size);
            Ok(Action::ListUsers(users::ListArgs {
                globals,
                page,
                limit,
            }))
        }
        users_cmd::CMD_ACTIVATE | users_cmd::CMD_DEACTIVATE => {
            Ok(Action::SetUserStatus(users::StatusArgs {
                globals,
                id: required(sub, users_cmd::ARG_ID)?,
                activate: name == users_cmd::CMD_ACTIVATE,
                assume_yes: sub.get_flag(users_cmd::ARG_YES),
            }))
        }
        other => bail!("unknown users subcommand: {other}"),
    }
}

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let mut config = AppConfig::load();
    if let Some(api_base_url) = matches.get_one::<String>(commands::ARG_API_BASE_URL) {
        config = config.with_api_base_url(api_base_url);
    }
    Url::parse(&config.api_base_url)
        .with_context(|| format!("invalid API base URL: {}", config.api_base_url))?;

    let token_file = matches
        .get_one::<String>(commands::ARG_TOKEN_FILE)
        .map_or_else(default_token_file, PathBuf::from);

    Ok(GlobalArgs::new(
        config.api_base_url,
        token_file,
        config.page_size,
    ))
}

fn required(matches: &clap::ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn dispatch(args: &[&str]) -> Result<Action> {
        let mut argv = vec!["userdesk"];
        argv.extend_from_slice(args);
        temp_env::with_vars(
            [
                ("USERDESK_API_BASE_URL", None::<&str>),
                ("USERDESK_TOKEN_FILE", None::<&str>),
                ("USERDESK_PASSWORD", None::<&str>),
            ],
            || handler(&commands::new().get_matches_from(argv)),
        )
    }

    #[test]
    fn test_login_action() {
        let action = dispatch(&[
            "--api-base-url",
            "https://api.example.com",
            "--token-file",
            "/tmp/token",
            "login",
            "--email",
            "a@b.com",
            "--password",
            "Secret123",
        ])
        .expect("login");

        let Action::Login(args) = action else {
            panic!("expected login action");
        };
        assert_eq!(args.globals.api_base_url, "https://api.example.com");
        assert_eq!(args.globals.token_file, PathBuf::from("/tmp/token"));
        assert_eq!(args.email, "a@b.com");
        assert_eq!(args.password.expose_secret(), "Secret123");
    }

    #[test]
    fn test_users_list_uses_configured_page_size() {
        let action = dispatch(&["users", "list", "--page", "2"]).expect("list");
        let Action::ListUsers(args) = action else {
            panic!("expected list action");
        };
        assert_eq!(args.page, 2);
        assert_eq!(args.limit, AppConfig::load().page_size);
    }

    #[test]
    fn test_activate_action() {
        let action = dispatch(&["users", "activate", "7"]).expect("activate");
        let Action::SetUserStatus(args) = action else {
            panic!("expected status action");
        };
        assert_eq!(args.id, "7");
        assert!(args.activate);
        assert!(!args.assume_yes);
    }

    #[test]
    fn test_invalid_api_base_url() {
        let result = dispatch(&["--api-base-url", "not a url", "whoami"]);
        assert!(result.is_err());
    }
}

use crate::cli::actions::{Action, account, session, users};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all console actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => session::login(args).await,
        Action::Logout(globals) => {
            session::logout(&globals);
            Ok(())
        }
        Action::Whoami(globals) => session::whoami(&globals).await,
        Action::Signup(args) => session::signup(args).await,
        Action::Profile(args) => account::profile(args).await,
        Action::Password(args) => account::password(args).await,
        Action::ListUsers(args) => users::list(args).await,
        Action::SetUserStatus(args) => users::set_status(args).await,
    }
}

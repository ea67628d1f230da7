pub mod account;
pub mod console;
pub mod session;
pub mod users;

// Internal "interpreter" for `Action`.
mod run;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Login(session::LoginArgs),
    Logout(GlobalArgs),
    Whoami(GlobalArgs),
    Signup(session::SignupArgs),
    Profile(account::ProfileArgs),
    Password(account::PasswordArgs),
    ListUsers(users::ListArgs),
    SetUserStatus(users::StatusArgs),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}

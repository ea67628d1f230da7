use crate::{
    app_lib::AppError,
    cli::{actions::console::Console, globals::GlobalArgs},
    features::auth::{
        client, flow,
        validation::{LoginForm, SignupForm},
    },
};
use anyhow::{Result, anyhow};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct LoginArgs {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct SignupArgs {
    pub globals: GlobalArgs,
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
}

/// Runs the login flow and leaves the token in the token file.
///
/// # Errors
/// Returns the screen message: backend detail, else "Invalid credentials".
pub async fn login(args: LoginArgs) -> Result<()> {
    let console = Console::new(&args.globals);
    let form = LoginForm {
        email: args.email,
        password: args.password.expose_secret().to_string(),
    };
    let request = form.validate().map_err(|err| screen_error(&err, "Invalid credentials"))?;
    let user = flow::login(&console.api, &console.session, &request)
        .await
        .map_err(|err| screen_error(&err, "Invalid credentials"))?;

    println!("Logged in as {} ({})", user.email, user.role.as_str());
    Ok(())
}

/// Clears the session and deletes the token file.
pub fn logout(globals: &GlobalArgs) {
    Console::new(globals).session.logout();
    println!("Logged out");
}

/// # Errors
/// Returns an error if the session cannot be restored.
pub async fn whoami(globals: &GlobalArgs) -> Result<()> {
    match Console::new(globals).hydrate().await? {
        Some(user) => println!("{} ({})", user.email, user.role.as_str()),
        None => println!("Not logged in"),
    }
    Ok(())
}

/// # Errors
/// Returns the validation message or backend detail, else "Signup failed".
pub async fn signup(args: SignupArgs) -> Result<()> {
    let console = Console::new(&args.globals);
    let password = args.password.expose_secret().to_string();
    let form = SignupForm {
        full_name: args.full_name,
        email: args.email,
        confirm_password: password.clone(),
        password,
    };
    let request = form.validate().map_err(|err| screen_error(&err, "Signup failed"))?;
    client::signup(&console.api, &request)
        .await
        .map_err(|err| screen_error(&err, "Signup failed"))?;

    println!("Account created; log in with `userdesk login`");
    Ok(())
}

/// Logs the full error and returns the text a screen would show.
pub(super) fn screen_error(err: &AppError, fallback: &str) -> anyhow::Error {
    tracing::debug!("{err}");
    anyhow!(err.user_message(fallback))
}

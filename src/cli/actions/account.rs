use crate::{
    app_lib::transport::HttpTransport,
    cli::{
        actions::{console::Console, session::screen_error},
        globals::GlobalArgs,
    },
    features::{
        auth::{guards::AppRoute, token::TokenStore, types::UserSummary},
        me::profile::{self, PasswordChangeForm},
    },
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct ProfileArgs {
    pub globals: GlobalArgs,
    pub full_name: Option<String>,
}

#[derive(Debug)]
pub struct PasswordArgs {
    pub globals: GlobalArgs,
    pub old_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

/// Prints the profile, or saves a new full name when one is given.
///
/// # Errors
/// Returns "login required" without a valid session, else the screen message.
pub async fn profile(args: ProfileArgs) -> Result<()> {
    let console = Console::new(&args.globals);
    let saving = args.full_name.is_some();
    let user = show_or_save(&console, args.full_name).await?;

    if saving {
        println!("Profile updated successfully");
    }
    println!("Full name: {}", user.full_name);
    println!("Email:     {}", user.email);
    println!("Role:      {}", user.role.as_str());
    Ok(())
}

// The guard's `/users/me` result doubles as the profile being shown.
async fn show_or_save<T: HttpTransport, S: TokenStore>(
    console: &Console<T, S>,
    full_name: Option<String>,
) -> Result<UserSummary> {
    let current = console.require(AppRoute::Profile).await?;
    match full_name {
        Some(full_name) => profile::save_profile(&console.api, &console.session, &full_name)
            .await
            .map_err(|err| screen_error(&err, "Update failed")),
        None => Ok(current),
    }
}

/// # Errors
/// Returns "login required" without a valid session, else the screen message.
pub async fn password(args: PasswordArgs) -> Result<()> {
    let console = Console::new(&args.globals);
    console.require(AppRoute::Profile).await?;

    let form = PasswordChangeForm {
        old_password: args.old_password.expose_secret().to_string(),
        new_password: args.new_password.expose_secret().to_string(),
        confirm_password: args.confirm_password.expose_secret().to_string(),
    };
    profile::change_password(&console.api, &form)
        .await
        .map_err(|err| screen_error(&err, "Password update failed"))?;

    println!("Password updated successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app_lib::{ApiClient, mock::MockTransport},
        features::auth::{session::SessionStore, token::MemoryTokenStore},
    };
    use serde_json::json;

    fn console() -> (MockTransport, Console<MockTransport, MemoryTokenStore>) {
        let transport = MockTransport::default();
        let tokens = MemoryTokenStore::default();
        tokens.save(&SecretString::from("tok")).expect("save");
        let console = Console {
            api: ApiClient::new("http://api.test", transport.clone(), tokens.clone()),
            session: SessionStore::new(tokens),
        };
        (transport, console)
    }

    fn me(full_name: &str) -> serde_json::Value {
        json!({"id": 3, "email": "a@b.com", "full_name": full_name, "role": "user", "is_active": true})
    }

    #[tokio::test]
    async fn showing_the_profile_fetches_me_once() {
        let (transport, console) = console();
        transport.respond(200, me("Ada"));

        let user = show_or_save(&console, None).await.expect("profile");

        assert_eq!(user.full_name, "Ada");
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "/users/me");
    }

    #[tokio::test]
    async fn saving_the_profile_puts_after_the_guard() {
        let (transport, console) = console();
        transport.respond(200, me("Ada"));
        transport.respond(200, me("Ada King"));

        let user = show_or_save(&console, Some("Ada King".to_string()))
            .await
            .expect("save");

        assert_eq!(user.full_name, "Ada King");
        let paths: Vec<String> = transport
            .requests()
            .iter()
            .map(|request| request.path().to_string())
            .collect();
        assert_eq!(paths, ["/users/me", "/users/me/profile"]);
    }

    #[tokio::test]
    async fn missing_session_requires_login() {
        let transport = MockTransport::default();
        let tokens = MemoryTokenStore::default();
        let console = Console {
            api: ApiClient::new("http://api.test", transport.clone(), tokens.clone()),
            session: SessionStore::new(tokens),
        };

        let err = show_or_save(&console, None).await.expect_err("guarded");

        assert_eq!(err.to_string(), "login required");
        assert!(transport.requests().is_empty());
    }
}

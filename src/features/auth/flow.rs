//! Session lifecycle flows: password login and startup hydration.
//!
//! Login ordering matters: the token is persisted before `/users/me` is
//! called because authenticated requests read it back from storage. The session
//! store is only written once the user fetch succeeded, so any earlier failure
//! leaves it untouched. A token persisted before a failed user fetch stays in
//! storage and is re-validated by [`hydrate`] on the next start.

use super::{
    client,
    session::SessionStore,
    token::TokenStore,
    types::{LoginRequest, UserSummary},
};
use crate::{
    app_lib::{AppError, ApiClient, transport::HttpTransport},
    features::me::client as me_client,
};
use secrecy::{ExposeSecret, SecretString};

/// Runs the full login sequence and returns the committed user.
///
/// # Errors
/// Returns the first failing step's error; [`AppError::MissingToken`] when the
/// backend answered without a usable token.
pub async fn login<T, S>(
    api: &ApiClient<T, S>,
    session: &SessionStore<S>,
    request: &LoginRequest,
) -> Result<UserSummary, AppError>
where
    T: HttpTransport,
    S: TokenStore,
{
    let response = client::login(api, request).await.inspect_err(|err| {
        tracing::warn!("login request failed: {err}");
    })?;

    let token = response
        .access_token
        .filter(|token| !token.trim().is_empty())
        .map(SecretString::from)
        .ok_or_else(|| {
            tracing::warn!("login response carried no access token");
            AppError::MissingToken
        })?;

    api.tokens().save(&token)?;
    tracing::debug!(token_len = token.expose_secret().len(), "bearer token persisted");

    let user = me_client::fetch_me(api).await.inspect_err(|err| {
        tracing::warn!("user fetch after login failed: {err}");
    })?;

    session.login(user.clone());
    Ok(user)
}

/// Restores the session from a persisted token on application start.
///
/// A `401` clears the stale token. Other failures keep the token but leave the
/// session empty, so guards treat it as invalid until a fetch succeeds.
///
/// # Errors
/// Returns the user fetch error for anything other than `401`.
pub async fn hydrate<T, S>(
    api: &ApiClient<T, S>,
    session: &SessionStore<S>,
) -> Result<Option<UserSummary>, AppError>
where
    T: HttpTransport,
    S: TokenStore,
{
    if session.token().is_none() {
        tracing::debug!("no persisted token; starting signed out");
        return Ok(None);
    }

    match me_client::fetch_me(api).await {
        Ok(user) => {
            session.login(user.clone());
            Ok(Some(user))
        }
        Err(err) if err.is_unauthorized() => {
            tracing::info!("persisted token rejected; clearing it");
            session.logout();
            Ok(None)
        }
        Err(err) => {
            tracing::warn!("session hydration failed: {err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::mock::MockTransport;
    use crate::features::auth::guards::{AppRoute, GuardDecision, evaluate};
    use crate::features::auth::token::MemoryTokenStore;
    use crate::features::auth::types::Role;
    use serde_json::json;

    struct Harness {
        transport: MockTransport,
        tokens: MemoryTokenStore,
        api: ApiClient<MockTransport, MemoryTokenStore>,
        session: SessionStore<MemoryTokenStore>,
    }

    fn harness() -> Harness {
        let transport = MockTransport::default();
        let tokens = MemoryTokenStore::default();
        Harness {
            api: ApiClient::new("http://api.test", transport.clone(), tokens.clone()),
            session: SessionStore::new(tokens.clone()),
            transport,
            tokens,
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".to_string(),
            password: SecretString::from("Abcdefg1"),
        }
    }

    fn me_body(role: &str) -> serde_json::Value {
        json!({
            "id": 1,
            "email": "a@b.com",
            "full_name": "Ada",
            "role": role,
            "is_active": true
        })
    }

    #[tokio::test]
    async fn successful_login_persists_token_then_commits_user() {
        let h = harness();
        h.transport.respond(200, json!({"access_token": "tok-1", "token_type": "bearer"}));
        h.transport.respond(200, me_body("user"));

        let user = login(&h.api, &h.session, &credentials())
            .await
            .expect("login");

        assert_eq!(user.email, "a@b.com");
        assert_eq!(h.session.current_user(), Some(user.clone()));

        let requests = h.transport.requests();
        assert_eq!(requests[0].path(), "/auth/login");
        assert_eq!(requests[0].bearer, None);
        assert_eq!(requests[1].path(), "/users/me");
        assert_eq!(requests[1].bearer.as_deref(), Some("tok-1"));

        let current = h.session.current_user();
        assert_eq!(
            evaluate(AppRoute::Profile, current.as_ref()),
            GuardDecision::Render
        );
        assert_eq!(
            evaluate(AppRoute::Admin, current.as_ref()),
            GuardDecision::Redirect("/login")
        );
    }

    #[tokio::test]
    async fn missing_or_blank_token_leaves_session_untouched() {
        for body in [json!({}), json!({"access_token": null}), json!({"access_token": "  "})] {
            let h = harness();
            h.transport.respond(200, body);

            let err = login(&h.api, &h.session, &credentials())
                .await
                .expect_err("must fail");

            assert_eq!(err, AppError::MissingToken);
            assert!(h.session.current_user().is_none());
            assert!(!h.tokens.contains_token());
            assert_eq!(h.transport.requests().len(), 1);
        }
    }

    #[tokio::test]
    async fn rejected_credentials_surface_backend_detail() {
        let h = harness();
        h.transport
            .respond(401, json!({"detail": "Incorrect email or password"}));

        let err = login(&h.api, &h.session, &credentials())
            .await
            .expect_err("must fail");

        assert_eq!(
            err.user_message("Invalid credentials"),
            "Incorrect email or password"
        );
        assert!(h.session.current_user().is_none());
        assert!(!h.tokens.contains_token());
    }

    #[tokio::test]
    async fn failed_user_fetch_keeps_token_but_not_user() {
        let h = harness();
        h.transport.respond(200, json!({"access_token": "tok-2"}));
        h.transport.fail(AppError::Network("offline".to_string()));

        let err = login(&h.api, &h.session, &credentials())
            .await
            .expect_err("must fail");

        assert!(matches!(err, AppError::Network(_)));
        assert!(h.session.current_user().is_none());
        assert!(h.tokens.contains_token());
    }

    #[tokio::test]
    async fn hydrate_without_token_makes_no_request() {
        let h = harness();
        let restored = hydrate(&h.api, &h.session).await.expect("hydrate");
        assert!(restored.is_none());
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn hydrate_restores_user_from_persisted_token() {
        let h = harness();
        h.tokens.save(&SecretString::from("tok-3")).expect("save");
        h.transport.respond(200, me_body("admin"));

        let restored = hydrate(&h.api, &h.session).await.expect("hydrate");

        assert_eq!(restored.map(|user| user.role), Some(Role::Admin));
        assert!(evaluate(AppRoute::Admin, h.session.current_user().as_ref()).allows());
    }

    #[tokio::test]
    async fn hydrate_clears_rejected_token() {
        let h = harness();
        h.tokens.save(&SecretString::from("expired")).expect("save");
        h.transport.respond(401, json!({"detail": "Could not validate credentials"}));

        let restored = hydrate(&h.api, &h.session).await.expect("hydrate");

        assert!(restored.is_none());
        assert!(!h.tokens.contains_token());
    }

    #[tokio::test]
    async fn hydrate_keeps_token_on_transient_failure() {
        let h = harness();
        h.tokens.save(&SecretString::from("tok-4")).expect("save");
        h.transport.respond_raw(503, "");

        let result = hydrate(&h.api, &h.session).await;

        assert!(result.is_err());
        assert!(h.tokens.contains_token());
        assert_eq!(
            evaluate(AppRoute::Profile, h.session.current_user().as_ref()),
            GuardDecision::Redirect("/login")
        );
    }

    #[tokio::test]
    async fn logout_after_login_redirects_both_guarded_routes() {
        let h = harness();
        h.transport.respond(200, json!({"access_token": "tok-5"}));
        h.transport.respond(200, me_body("admin"));
        login(&h.api, &h.session, &credentials())
            .await
            .expect("login");

        h.session.logout();

        assert!(!h.tokens.contains_token());
        for route in [AppRoute::Profile, AppRoute::Admin] {
            assert_eq!(
                evaluate(route, h.session.current_user().as_ref()),
                GuardDecision::Redirect("/login")
            );
        }
    }
}

//! Wiring shared by console actions: one API client and one session store over
//! the token file, plus the guard check that mirrors the web routes.

use crate::{
    app_lib::{
        ApiClient,
        transport::{HttpTransport, ReqwestTransport},
    },
    cli::globals::GlobalArgs,
    features::auth::{
        flow,
        guards::{AppRoute, GuardDecision, evaluate},
        session::SessionStore,
        token::{FileTokenStore, TokenStore},
        types::UserSummary,
    },
};
use anyhow::{Context, Result, bail};

pub struct Console<T = ReqwestTransport, S = FileTokenStore> {
    pub api: ApiClient<T, S>,
    pub session: SessionStore<S>,
}

impl Console {
    #[must_use]
    pub fn new(globals: &GlobalArgs) -> Self {
        let tokens = FileTokenStore::new(globals.token_file.clone());
        let api = ApiClient::new(
            globals.api_base_url.clone(),
            ReqwestTransport::default(),
            tokens.clone(),
        );
        Self {
            api,
            session: SessionStore::new(tokens),
        }
    }
}

impl<T: HttpTransport, S: TokenStore> Console<T, S> {
    /// Restores the session from the token file.
    ///
    /// # Errors
    /// Returns an error if `/users/me` fails with anything but `401`.
    pub async fn hydrate(&self) -> Result<Option<UserSummary>> {
        flow::hydrate(&self.api, &self.session)
            .await
            .context("failed to restore session")
    }

    /// Hydrates, then applies the same guard as the web route.
    ///
    /// # Errors
    /// Returns "login required" when the guard redirects.
    pub async fn require(&self, route: AppRoute) -> Result<UserSummary> {
        let user = self.hydrate().await?;
        match (evaluate(route, user.as_ref()), user) {
            (GuardDecision::Render, Some(user)) => Ok(user),
            _ => {
                tracing::debug!(route = route.path(), "guard redirected");
                bail!("login required")
            }
        }
    }
}

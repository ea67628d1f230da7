//! Auth session context for the web frontend. The provider owns the single
//! [`SessionStore`], mirrors it into a reactive signal through a store
//! subscription, and hydrates the session once on mount from the persisted
//! token.

use crate::{
    app_lib::{ApiClient, config::AppConfig, transport::BrowserTransport},
    features::auth::{
        flow,
        session::SessionStore,
        token::BrowserTokenStore,
        types::UserSummary,
    },
};
use leptos::{prelude::*, task::spawn_local};

pub type WebApi = ApiClient<BrowserTransport, BrowserTokenStore>;
pub type WebSession = SessionStore<BrowserTokenStore>;

/// Auth session context shared through Leptos.
#[derive(Clone)]
pub struct AuthContext {
    pub session: WebSession,
    pub user: RwSignal<Option<UserSummary>>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
    pub hydrating: RwSignal<bool>,
    config: AppConfig,
}

impl AuthContext {
    /// Builds a context around a fresh session store.
    fn new(config: AppConfig) -> Self {
        let session = SessionStore::new(BrowserTokenStore::new(config.token_key.clone()));
        let user = RwSignal::new(None);
        session.subscribe(move |current| user.set(current.cloned()));

        let is_authenticated = Signal::derive(move || user.with(Option::is_some));
        let is_admin = Signal::derive(move || {
            user.with(|current| current.as_ref().is_some_and(UserSummary::is_admin))
        });
        let hydrating = RwSignal::new(session.token().is_some());

        Self {
            session,
            user,
            is_authenticated,
            is_admin,
            hydrating,
            config,
        }
    }

    /// API client sharing the session's token storage.
    pub fn api(&self) -> WebApi {
        ApiClient::new(
            self.config.api_base_url.clone(),
            BrowserTransport,
            self.session.tokens().clone(),
        )
    }

    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Replaces the session user after login or a profile update.
    pub fn login(&self, user: UserSummary) {
        self.session.login(user);
    }

    /// Clears the user and the persisted token.
    pub fn logout(&self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<UserSummary> {
        self.session.current_user()
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(AppConfig::load());
    provide_context(auth.clone());

    if auth.hydrating.get_untracked() {
        let auth_for_fetch = auth.clone();
        spawn_local(async move {
            let api = auth_for_fetch.api();
            // Failures keep the session empty; the guard then redirects.
            let _ = flow::hydrate(&api, &auth_for_fetch.session).await;
            auth_for_fetch.hydrating.set(false);
        });
    }

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(AppConfig::load()))
}

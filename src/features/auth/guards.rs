//! Route access policy. One table maps each screen to the access it needs and
//! [`evaluate`] is the only place that reads it. UX-only: the backend still
//! enforces authorization on every endpoint.

use super::types::{Role, UserSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Signup,
    Profile,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn allows(self) -> bool {
        self == GuardDecision::Render
    }
}

pub const LOGIN_PATH: &str = "/login";

// Login and signup stay reachable for signed-in users as well.
const ROUTES: &[(AppRoute, &str, Access)] = &[
    (AppRoute::Login, LOGIN_PATH, Access::Public),
    (AppRoute::Signup, "/signup", Access::Public),
    (AppRoute::Profile, "/profile", Access::Authenticated),
    (AppRoute::Admin, "/admin", Access::Role(Role::Admin)),
];

impl AppRoute {
    pub fn path(self) -> &'static str {
        Self::entry(self).1
    }

    pub fn access(self) -> Access {
        Self::entry(self).2
    }

    /// Looks a path up in the route table, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        ROUTES
            .iter()
            .find(|(_, candidate, _)| *candidate == normalized)
            .map(|(route, _, _)| *route)
    }

    fn entry(self) -> &'static (AppRoute, &'static str, Access) {
        // Every variant has a row; the fallback keeps this total.
        ROUTES
            .iter()
            .find(|(route, _, _)| *route == self)
            .unwrap_or(&ROUTES[0])
    }
}

/// Decides whether `route` renders for the current session user.
///
/// Anything short of the required access redirects to `/login`, including a
/// signed-in user without the admin role.
pub fn evaluate(route: AppRoute, user: Option<&UserSummary>) -> GuardDecision {
    let allowed = match route.access() {
        Access::Public => true,
        Access::Authenticated => user.is_some(),
        Access::Role(role) => user.is_some_and(|user| user.role == role),
    };

    if allowed {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Path-based variant of [`evaluate`]; `None` for paths outside the table.
pub fn evaluate_path(path: &str, user: Option<&UserSummary>) -> Option<GuardDecision> {
    AppRoute::from_path(path).map(|route| evaluate(route, user))
}

#[cfg(target_arch = "wasm32")]
pub use view::RequireRoute;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{AppRoute, GuardDecision, evaluate};
    use crate::components::Spinner;
    use crate::features::auth::state::use_auth;
    use leptos::prelude::*;
    use leptos_router::hooks::use_navigate;

    /// Renders `children` only while the guard allows `route`; otherwise
    /// navigates to the redirect target. Re-evaluated on every session change.
    #[component]
    pub fn RequireRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
        let auth = use_auth();
        let navigate = use_navigate();
        let user = auth.user;
        let hydrating = auth.hydrating;
        let decision = Memo::new(move |_| evaluate(route, user.get().as_ref()));

        Effect::new(move |_| {
            if hydrating.get() {
                return;
            }
            if let GuardDecision::Redirect(target) = decision.get() {
                navigate(target, Default::default());
            }
        });

        view! {
            <Show
                when=move || !hydrating.get() && decision.get().allows()
                fallback=move || {
                    hydrating
                        .get()
                        .then_some(view! { <div class="mt-8 text-center"><Spinner /></div> })
                }
            >
                {children()}
            </Show>
        }
    }
}

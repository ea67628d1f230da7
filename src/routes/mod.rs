//! Route table for the web frontend. Guarded screens wrap themselves in
//! `RequireRoute`, which consults the same access table as the console.

mod admin;
mod login;
mod not_found;
mod profile;
mod signup;

pub(crate) use admin::AdminPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use signup::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path="/login" /> } />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/admin") view=AdminPage />
        </Routes>
    }
}

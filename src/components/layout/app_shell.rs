//! Shared layout wrapper with navigation and content container. The navigation
//! bar only renders for a signed-in user and mirrors the session store, so a
//! profile update or logout is reflected immediately. Navigation remains
//! client-side; backend routes must enforce access control.

use crate::{
    app_lib::build_info,
    features::auth::{guards::LOGIN_PATH, state::use_auth, types::UserSummary},
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

fn identity_label(user: &UserSummary) -> String {
    format!("{} ({})", user.email, user.role.as_str())
}

/// Wraps routes with the navigation bar, content container and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let user = auth.user;
    let is_authenticated = auth.is_authenticated;
    let is_admin = auth.is_admin;
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        set_menu_open.set(false);
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Show when=move || is_authenticated.get()>
                <header class="border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
                    <nav class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                        <span class="text-sm text-gray-600 dark:text-gray-300">
                            {move || user.with(|current| current.as_ref().map(identity_label))}
                        </span>
                        <button
                            type="button"
                            class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                            aria-controls="navbar-default"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=toggle_menu
                        >
                            <span class="sr-only">"Open main menu"</span>
                            <svg
                                class="w-5 h-5"
                                aria-hidden="true"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 17 14"
                            >
                                <path
                                    stroke="currentColor"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M1 1h15M1 7h15M1 13h15"
                                ></path>
                            </svg>
                        </button>
                        <div
                            id="navbar-default"
                            class="w-full md:block md:w-auto"
                            class:hidden=move || !menu_open.get()
                        >
                            <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                                <li>
                                    <A
                                        href="/profile"
                                        {..}
                                        class=NAV_LINK_CLASS
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Profile"
                                    </A>
                                </li>
                                <Show when=move || is_admin.get()>
                                    <li>
                                        <A
                                            href="/admin"
                                            {..}
                                            class=NAV_LINK_CLASS
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Admin"
                                        </A>
                                    </li>
                                </Show>
                                <li>
                                    <button type="button" class=NAV_LINK_CLASS on:click=on_logout.clone()>
                                        "Logout"
                                    </button>
                                </li>
                            </ul>
                        </div>
                    </nav>
                </header>
            </Show>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400">
                {format!("userdesk {}", build_info::version_label())}
            </footer>
        </div>
    }
}

//! Fallback screen for paths outside the route table.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">"404"</h1>
                <p class="mt-2 text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
                <A
                    href="/login"
                    {..}
                    class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                >
                    "Back to login"
                </A>
            </div>
        </AppShell>
    }
}

//! Admin dashboard. Lists one page of users at a time and toggles account
//! status after a browser confirmation. The list is refetched wholesale after
//! every successful toggle; failures raise a blocking alert instead of an
//! inline message.

use crate::{
    components::{Alert, AlertKind, AppShell, Button, ButtonKind, Spinner},
    features::{
        auth::{RequireRoute, guards::AppRoute, state::use_auth, types::UserSummary},
        users::{
            admin::{Pagination, StatusChange, ToggleOutcome, toggle_user_status},
            client,
        },
    },
};
use leptos::{prelude::*, task::spawn_local};

const HEADER_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRoute route=AppRoute::Admin>
                <AdminDashboard />
            </RequireRoute>
        </AppShell>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();
    let pagination = RwSignal::new(Pagination::new(auth.page_size()));

    let auth_for_fetch = auth.clone();
    let users = LocalResource::new(move || {
        let api = auth_for_fetch.api();
        let current = pagination.get();
        async move { client::list_users(&api, current.page(), current.limit()).await }
    });

    let toggle = Callback::new(move |user: UserSummary| {
        let api = auth.api();
        spawn_local(async move {
            match toggle_user_status(&api, &user.id, user.is_active, confirm).await {
                Ok(ToggleOutcome::Applied(_)) => users.refetch(),
                Ok(ToggleOutcome::Cancelled) => {}
                Err(_) => alert("Action failed"),
            }
        });
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Admin Dashboard"</h1>
            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=HEADER_CLASS>"Email"</th>
                            <th scope="col" class=HEADER_CLASS>"Full Name"</th>
                            <th scope="col" class=HEADER_CLASS>"Role"</th>
                            <th scope="col" class=HEADER_CLASS>"Status"</th>
                            <th scope="col" class=HEADER_CLASS>"Action"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center"><Spinner label="Loading users..." /></td>
                            </tr>
                        }>
                            {move || match users.get() {
                                Some(Ok(list)) => {
                                    view! {
                                        <For
                                            each=move || list.clone()
                                            key=|user| (user.id.clone(), user.is_active)
                                            children=move |user| view! { <UserRow user=user on_toggle=toggle /> }
                                        />
                                    }
                                        .into_any()
                                }
                                Some(Err(_)) => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-4">
                                                <Alert kind=AlertKind::Error message="Failed to load users".to_string() />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-12 text-center"><Spinner label="Loading users..." /></td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
            <div class="flex items-center gap-4">
                <Button
                    kind=ButtonKind::Secondary
                    disabled=Signal::derive(move || !pagination.get().has_prev())
                    on_click=move |()| pagination.update(|current| *current = current.prev())
                >
                    "Prev"
                </Button>
                <span class="text-sm text-gray-600 dark:text-gray-300">
                    {move || format!("Page {}", pagination.get().page())}
                </span>
                <Button
                    kind=ButtonKind::Secondary
                    on_click=move |()| pagination.update(|current| *current = current.next())
                >
                    "Next"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn UserRow(user: UserSummary, on_toggle: Callback<UserSummary>) -> impl IntoView {
    let change = StatusChange::for_user(user.is_active);
    let kind = match change {
        StatusChange::Activate => ButtonKind::Primary,
        StatusChange::Deactivate => ButtonKind::Danger,
    };
    let status = if user.is_active { "Active" } else { "Inactive" };
    let snapshot = user.clone();

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                {user.email}
            </td>
            <td class=CELL_CLASS>{user.full_name}</td>
            <td class=CELL_CLASS>{user.role.as_str()}</td>
            <td class=CELL_CLASS>{status}</td>
            <td class=CELL_CLASS>
                <Button kind=kind on_click=move |()| on_toggle.run(snapshot.clone())>
                    {change.label()}
                </Button>
            </td>
        </tr>
    }
}

fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && window.alert_with_message(message).is_err()
    {
        tracing::debug!("failed to show alert: {message}");
    }
}

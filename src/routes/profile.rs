//! Profile route for the signed-in user. It loads `/users/me`, lets the user
//! edit the full name, and hosts a collapsible password change form. A saved
//! profile is committed into the session so the navigation bar follows it.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, ButtonKind, Spinner},
    features::{
        auth::{RequireRoute, guards::AppRoute, state::use_auth},
        me::{
            client as me_client,
            profile::{self, PasswordChangeForm},
        },
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

type Status = Option<(AlertKind, String)>;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireRoute route=AppRoute::Profile>
                <ProfileContent />
            </RequireRoute>
        </AppShell>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = use_auth();
    let auth_for_fetch = auth.clone();
    let profile = LocalResource::new(move || {
        let api = auth_for_fetch.api();
        async move { me_client::fetch_me(&api).await }
    });

    let (full_name, set_full_name) = signal(String::new());
    let (profile_status, set_profile_status) = signal::<Status>(None);

    Effect::new(move |_| {
        if let Some(Ok(user)) = profile.get() {
            set_full_name.set(user.full_name);
        }
    });

    let auth_for_save = auth.clone();
    let save_action = Action::new_local(move |name: &String| {
        let auth = auth_for_save.clone();
        let name = name.clone();
        async move { profile::save_profile(&auth.api(), &auth.session, &name).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            let status = match result {
                Ok(_) => (AlertKind::Success, "Profile updated successfully".to_string()),
                Err(err) => (AlertKind::Error, err.user_message("Update failed")),
            };
            set_profile_status.set(Some(status));
        }
    });

    let on_save = move |event: SubmitEvent| {
        event.prevent_default();
        set_profile_status.set(None);
        save_action.dispatch(full_name.get_untracked());
    };

    view! {
        <div class="max-w-lg mx-auto space-y-8">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Profile"</h1>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match profile.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(Err(_)) => {
                        view! {
                            <Alert kind=AlertKind::Error message="Failed to load profile".to_string() />
                        }
                            .into_any()
                    }
                    Some(Ok(user)) => {
                        view! {
                            <form class="space-y-5" on:submit=on_save>
                                <div>
                                    <label class=LABEL_CLASS for="full-name">"Full name"</label>
                                    <input
                                        id="full-name"
                                        type="text"
                                        class=INPUT_CLASS
                                        prop:value=full_name
                                        on:input=move |event| set_full_name.set(event_target_value(&event))
                                    />
                                </div>
                                <div>
                                    <label class=LABEL_CLASS for="email">"Email"</label>
                                    <input
                                        id="email"
                                        type="email"
                                        class=INPUT_CLASS
                                        prop:value=user.email
                                        readonly
                                    />
                                </div>
                                <Button button_type="submit" disabled=save_action.pending()>
                                    "Save Profile"
                                </Button>
                                <StatusAlert status=profile_status />
                            </form>
                        }
                            .into_any()
                    }
                }}
            </Suspense>
            <PasswordSection />
        </div>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let auth = use_auth();
    let (expanded, set_expanded) = signal(false);
    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (status, set_status) = signal::<Status>(None);

    let password_action = Action::new_local(move |form: &PasswordChangeForm| {
        let api = auth.api();
        let form = form.clone();
        async move { profile::change_password(&api, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = password_action.value().get() {
            match result {
                Ok(()) => {
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_expanded.set(false);
                    set_status.set(Some((
                        AlertKind::Success,
                        "Password updated successfully".to_string(),
                    )));
                }
                Err(err) => set_status.set(Some(password_error(&err))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_status.set(None);

        let form = PasswordChangeForm {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(err) = form.validate() {
            set_status.set(Some(password_error(&err)));
            return;
        }
        password_action.dispatch(form);
    };

    view! {
        <section class="space-y-4">
            <Button
                kind=ButtonKind::Secondary
                on_click=move |()| set_expanded.update(|open| *open = !*open)
            >
                {move || if expanded.get() { "Cancel" } else { "Change Password" }}
            </Button>
            <Show when=move || expanded.get()>
                <form class="space-y-5" on:submit=on_submit>
                    <div>
                        <label class=LABEL_CLASS for="old-password">"Current password"</label>
                        <input
                            id="old-password"
                            type="password"
                            class=INPUT_CLASS
                            autocomplete="current-password"
                            prop:value=old_password
                            on:input=move |event| set_old_password.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=LABEL_CLASS for="new-password">"New password"</label>
                        <input
                            id="new-password"
                            type="password"
                            class=INPUT_CLASS
                            autocomplete="new-password"
                            prop:value=new_password
                            on:input=move |event| set_new_password.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=LABEL_CLASS for="confirm-password">"Confirm new password"</label>
                        <input
                            id="confirm-password"
                            type="password"
                            class=INPUT_CLASS
                            autocomplete="new-password"
                            prop:value=confirm_password
                            on:input=move |event| set_confirm_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=password_action.pending()>
                        "Update Password"
                    </Button>
                </form>
            </Show>
            <StatusAlert status=status />
        </section>
    }
}

fn password_error(err: &AppError) -> (AlertKind, String) {
    (AlertKind::Error, err.user_message("Password update failed"))
}

#[component]
fn StatusAlert(status: ReadSignal<Status>) -> impl IntoView {
    move || {
        status
            .get()
            .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
    }
}

//! Signup route. Local checks run in a fixed order before anything is sent;
//! a created account is sent to the login screen.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::auth::{client, state::use_auth, validation::SignupForm},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let signup_action = Action::new_local(move |form: &SignupForm| {
        let api = auth.api();
        let form = form.clone();
        async move {
            let request = form.validate()?;
            client::signup(&api, &request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => {
                    tracing::info!("account created");
                    navigate("/login", Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let form = SignupForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(err) = form.validate() {
            set_error.set(Some(err));
            return;
        }
        signup_action.dispatch(form);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Sign Up"</h1>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="full-name">"Full name"</label>
                    <input
                        id="full-name"
                        type="text"
                        class=INPUT_CLASS
                        autocomplete="name"
                        prop:value=full_name
                        on:input=move |event| set_full_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        autocomplete="email"
                        prop:value=email
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        prop:value=password
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        prop:value=confirm_password
                        on:input=move |event| set_confirm_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=signup_action.pending()>
                    "Create account"
                </Button>
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    "Already registered? "
                    <A href="/login" {..} class="text-blue-700 hover:underline dark:text-blue-500">
                        "Login"
                    </A>
                </p>
                {move || {
                    signup_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.user_message("Signup failed") />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}

//! Credentials Form Component
//!
//! Email + password form used by login and registration.

use leptos::prelude::*;

/// Email/password form
///
/// # Arguments
/// * `submit_label` - Text of the submit button
/// * `error` - Message shown under the form
/// * `on_submit` - Receives `(email, password)`; returning `true` clears the fields
#[component]
pub fn CredentialsForm(
    #[prop(into)] submit_label: String,
    #[prop(into)] error: Signal<String>,
    on_submit: Callback<(String, String), bool>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let reset = on_submit.run((email.get_untracked(), password.get_untracked()));
        if reset {
            set_email.set(String::new());
            set_password.set(String::new());
        }
    };

    view! {
        <form class="credentials-form" on:submit=submit>
            <label>
                "Email"
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    name="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">{submit_label}</button>
            <p class="error">{move || error.get()}</p>
        </form>
    }
}

//! Remote Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::api::ApiClient;
use todo_core::Credentials;

use super::start_session;
use crate::components::CredentialsForm;
use crate::context::use_app_context;
use crate::routes::Page;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (error, set_error) = signal(String::new());

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        set_error.set(String::new());
        let creds = match Credentials::from_form(&email, &password) {
            Ok(creds) => creds,
            Err(e) => {
                set_error.set(e.to_string());
                return false;
            }
        };

        let config = ctx.config();
        spawn_local(async move {
            let api = ApiClient::from_config(&config);
            let result = match api.login(&creds).await {
                Ok(session) => start_session(&config, &session).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(message) = result {
                set_error.set(message);
            }
        });
        false
    });

    view! {
        <main class="auth-page">
            <h1>"Log in"</h1>
            <CredentialsForm submit_label="Log in" error=error on_submit=on_submit />
            <p class="subtext">
                "No account yet? " <a href=Page::Register.path()>"Register"</a>
            </p>
        </main>
    }
}

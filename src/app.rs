//! Simple To-Do Frontend App
//!
//! Root component: resolves configuration and picks the page for the URL.

use leptos::prelude::*;

use crate::config;
use crate::context::AppContext;
use crate::pages::{LocalApp, LoginPage, RegisterPage, TodosPage};
use crate::routes::{current_page, Page};

#[component]
pub fn App() -> impl IntoView {
    let config = config::resolve();
    let page = current_page();
    log::info!("Starting {:?} page, API at {}", page, config.api_base);

    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(config, (reload_trigger, set_reload_trigger)));

    match page {
        Page::Local => view! { <LocalApp /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
        Page::Todos => view! { <TodosPage /> }.into_any(),
        Page::NotFound => view! {
            <main class="auth-page">
                <h1>"Page not found"</h1>
                <a href=Page::Local.path()>"Back to your lists"</a>
            </main>
        }
        .into_any(),
    }
}

//! Session Header Component

use leptos::prelude::*;

/// Welcome line with a logout button
#[component]
pub fn SessionHeader(#[prop(into)] welcome: String, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="session-header">
            <p id="welcome">{welcome}</p>
            <button id="logout-btn" type="button" on:click=move |_| on_logout.run(())>
                "Log out"
            </button>
        </header>
    }
}

//! Local Variant Page
//!
//! Everything lives in `localStorage`; login accepts any credentials.

use std::collections::HashMap;

use leptos::prelude::*;
use todo_core::store::AddItemOutcome;
use todo_core::view::{limit_reached_note, project_local, ViewModel};
use todo_core::TodoStore;

use crate::components::{CredentialsForm, ListCollection, NewListForm, SessionHeader};
use crate::context::use_app_context;
use crate::storage::BrowserStorage;

#[component]
pub fn LocalApp() -> impl IntoView {
    let ctx = use_app_context();
    let storage_key = ctx.config.with_value(|c| c.storage_key.clone());

    // State
    let store = RwSignal::new_local(TodoStore::load(BrowserStorage::open(), storage_key));
    let (login_error, set_login_error) = signal(String::new());
    let (list_error, set_list_error) = signal(String::new());
    let list_title = RwSignal::new(String::new());
    let note_overrides = RwSignal::new(HashMap::<String, String>::new());

    let view_model = Memo::new(move |_| store.with(|s| project_local(s.state())));

    let on_login = Callback::new(move |(email, password): (String, String)| {
        match store.try_update(|s| s.login(&email, &password).map(|_| ())) {
            Some(Ok(())) => {
                set_login_error.set(String::new());
                set_list_error.set(String::new());
                true
            }
            Some(Err(e)) => {
                set_login_error.set(e.to_string());
                false
            }
            None => false,
        }
    });

    let on_logout = Callback::new(move |_: ()| {
        if let Some(Err(e)) = store.try_update(|s| s.logout()) {
            log::error!("Failed to persist logout: {}", e);
        }
    });

    let on_create = Callback::new(move |title: String| {
        match store.try_update(|s| s.create_list(&title).map(|_| ())) {
            Some(Ok(())) => {
                set_list_error.set(String::new());
                list_title.set(String::new());
                note_overrides.write().clear();
            }
            Some(Err(e)) => set_list_error.set(e.to_string()),
            None => {}
        }
    });

    let on_add = Callback::new(move |(list_id, content): (String, String)| {
        match store.try_update(|s| s.add_item(&list_id, &content)) {
            Some(Ok(AddItemOutcome::Added(_))) => note_overrides.write().clear(),
            Some(Ok(AddItemOutcome::Ignored)) | None => {}
            Some(Err(e)) if e.is_capacity() => {
                note_overrides.write().insert(list_id, limit_reached_note());
            }
            Some(Err(e)) => log::error!("Could not add item to {}: {}", list_id, e),
        }
    });

    view! {
        <main class="app">
            {move || match view_model.get() {
                ViewModel::SignedOut => view! {
                    <section id="login-view" class="view active">
                        <h1>"Simple To-Do"</h1>
                        <p class="subtext">"Sign in with any email and password."</p>
                        <CredentialsForm submit_label="Log in" error=login_error on_submit=on_login />
                    </section>
                }
                .into_any(),
                ViewModel::SignedIn { welcome, lists } => view! {
                    <section id="home-view" class="view active">
                        <SessionHeader welcome=welcome on_logout=on_logout />
                        <NewListForm title=list_title error=list_error on_submit=on_create />
                        <ListCollection lists=lists notes=note_overrides on_add=on_add />
                    </section>
                }
                .into_any(),
            }}
        </main>
    }
}

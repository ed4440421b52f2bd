//! Remote To-Do Page
//!
//! Gated on a cached session. Lists are re-fetched after every successful
//! mutation; nothing is cached between actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_core::api::ApiClient;
use todo_core::validation;
use todo_core::view::{project_lists, welcome_text, ListCollectionView, REMOTE_EMPTY_PLACEHOLDER};

use super::session_cache;
use crate::components::{ListCollection, NewListForm, SessionHeader};
use crate::context::use_app_context;
use crate::routes::{redirect, Page};
use crate::store::{store_set_list_error, store_set_lists, store_set_note, TodosState, TodosStateStoreFields};

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctx = use_app_context();
    let Some(session) = session_cache(&ctx.config()).load() else {
        redirect(Page::Login);
        return view! { <p class="subtext">"Redirecting to login..."</p> }.into_any();
    };

    let store = Store::new(TodosState::default());
    let user_id = session.id.clone();
    let list_title = RwSignal::new(String::new());

    // Load lists on mount and whenever the trigger changes
    let fetch_user = user_id.clone();
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let config = ctx.config();
        let user_id = fetch_user.clone();
        log::debug!("Loading lists for user {}, trigger={}", user_id, trigger);
        spawn_local(async move {
            match ApiClient::from_config(&config).fetch_lists(&user_id).await {
                Ok(lists) => {
                    log::debug!("Loaded {} lists", lists.len());
                    store_set_lists(&store, lists);
                }
                Err(e) => {
                    log::error!("Failed to load lists: {:?}", e);
                    store_set_list_error(&store, e.to_string());
                }
            }
        });
    });

    let on_logout = Callback::new(move |_: ()| {
        if let Err(e) = session_cache(&ctx.config()).clear() {
            log::error!("Failed to clear session: {}", e);
        }
        redirect(Page::Login);
    });

    let on_create = Callback::new(move |raw: String| {
        store_set_list_error(&store, "");
        let title = match validation::list_title(&raw) {
            Ok(title) => title,
            Err(e) => {
                store_set_list_error(&store, e.to_string());
                return;
            }
        };

        let config = ctx.config();
        let user_id = user_id.clone();
        spawn_local(async move {
            match ApiClient::from_config(&config).create_list(&user_id, &title).await {
                Ok(()) => {
                    log::info!("Created list {:?}", title);
                    list_title.set(String::new());
                    ctx.reload();
                }
                Err(e) => store_set_list_error(&store, e.to_string()),
            }
        });
    });

    let on_add = Callback::new(move |(list_id, raw): (String, String)| {
        let Some(content) = validation::trimmed(&raw) else {
            return;
        };

        let config = ctx.config();
        spawn_local(async move {
            match ApiClient::from_config(&config).add_item(&list_id, &content).await {
                Ok(()) => ctx.reload(),
                Err(e) => store_set_note(&store, list_id, e.to_string()),
            }
        });
    });

    let list_error = Signal::derive(move || store.list_error().get());
    let notes = Signal::derive(move || store.item_notes().get());
    let lists_view = Memo::new(move |_| {
        if store.loaded().get() {
            Some(project_lists(&store.lists().get(), REMOTE_EMPTY_PLACEHOLDER))
        } else {
            None
        }
    });

    view! {
        <main class="app">
            <section id="home-view" class="view active">
                <SessionHeader welcome=welcome_text(&session.email) on_logout=on_logout />
                <NewListForm title=list_title error=list_error on_submit=on_create />
                {move || match lists_view.get() {
                    Some(lists) => view! {
                        <ListCollection lists=lists notes=notes on_add=on_add />
                    }
                    .into_any(),
                    None => view! {
                        <ListCollection
                            lists=ListCollectionView::Lists(Vec::new())
                            notes=notes
                            on_add=on_add
                        />
                    }
                    .into_any(),
                }}
            </section>
        </main>
    }
    .into_any()
}

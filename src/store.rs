//! Remote Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::RemoteList;

/// State of the remote to-do page with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodosState {
    /// Lists as last fetched from the API
    pub lists: Vec<RemoteList>,
    /// False until the first fetch completes
    pub loaded: bool,
    /// Error shown under the new-list form
    pub list_error: String,
    /// Per-list messages replacing the capacity note, keyed by list id
    pub item_notes: HashMap<String, String>,
}

/// Type alias for the store
pub type TodosStore = Store<TodosState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the lists after a fetch; stale notes go with them
pub fn store_set_lists(store: &TodosStore, lists: Vec<RemoteList>) {
    store.lists().set(lists);
    store.item_notes().write().clear();
    store.loaded().set(true);
}

/// Show a message in place of a list's capacity note
pub fn store_set_note(store: &TodosStore, list_id: String, note: String) {
    store.item_notes().write().insert(list_id, note);
}

pub fn store_set_list_error(store: &TodosStore, error: impl Into<String>) {
    store.list_error().set(error.into());
}

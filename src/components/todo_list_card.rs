//! Todo List Card Component
//!
//! One list block: title, creation time, items, item form and note.

use leptos::prelude::*;
use todo_core::view::ListCard;

/// Renders a projected list
///
/// # Arguments
/// * `card` - Projected list
/// * `note_override` - Message shown instead of the capacity note (e.g. limit reached)
/// * `on_add` - Receives `(list_id, raw item text)`
#[component]
pub fn TodoListCard(
    card: ListCard,
    #[prop(into)] note_override: Signal<Option<String>>,
    on_add: Callback<(String, String)>,
) -> impl IntoView {
    let (item_text, set_item_text) = signal(String::new());

    let ListCard {
        id,
        title,
        created_label,
        items,
        note: capacity_note,
    } = card;

    let note = move || note_override.get().unwrap_or_else(|| capacity_note.clone());

    let list_id = id.clone();
    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run((list_id.clone(), item_text.get_untracked()));
    };

    view! {
        <article class="todo-list" data-list-id=id>
            <h3 class="list-title">{title}</h3>
            <p class="meta">{created_label}</p>
            <ul class="items">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
            <form class="item-form" on:submit=add_item>
                <input
                    class="item-input"
                    type="text"
                    placeholder="Add an item..."
                    prop:value=move || item_text.get()
                    on:input=move |ev| set_item_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
            <p class="item-note">{note}</p>
        </article>
    }
}

//! List Collection Component
//!
//! Rebuilds the whole list container from a projection.

use std::collections::HashMap;

use leptos::prelude::*;
use todo_core::view::ListCollectionView;

use super::TodoListCard;

#[component]
pub fn ListCollection(
    lists: ListCollectionView,
    /// Note overrides keyed by list id
    #[prop(into)]
    notes: Signal<HashMap<String, String>>,
    on_add: Callback<(String, String)>,
) -> impl IntoView {
    let content = match lists {
        ListCollectionView::Empty { placeholder } => view! {
            <p class="subtext">{placeholder}</p>
        }
        .into_any(),
        ListCollectionView::Lists(cards) => cards
            .into_iter()
            .map(|card| {
                let id = card.id.clone();
                let note_override = Signal::derive(move || notes.with(|m| m.get(&id).cloned()));
                view! { <TodoListCard card=card note_override=note_override on_add=on_add /> }
            })
            .collect_view()
            .into_any(),
    };

    view! { <div id="lists-container" class="lists">{content}</div> }
}

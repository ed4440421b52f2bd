//! New List Form Component

use leptos::prelude::*;

/// Form for creating a list
///
/// The title lives in the parent so it can be cleared once creation succeeds,
/// which for the remote variant happens after the request completes.
#[component]
pub fn NewListForm(
    title: RwSignal<String>,
    #[prop(into)] error: Signal<String>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(title.get_untracked());
    };

    view! {
        <form id="new-list-form" class="new-list-form" on:submit=create_list>
            <input
                id="list-name"
                name="listName"
                type="text"
                placeholder="New list name..."
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <button type="submit">"Create list"</button>
            <p id="list-error" class="error">{move || error.get()}</p>
        </form>
    }
}

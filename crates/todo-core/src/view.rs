//! View Projection
//!
//! Pure functions from state to a renderable description. The UI crate turns
//! a `ViewModel` into DOM; nothing here touches the browser.

use chrono::{DateTime, Local, Utc};

use crate::domain::{sort_newest_first, ListSummary, TodoError};
use crate::state::PersistedState;
use crate::MAX_ITEMS;

pub const LOCAL_EMPTY_PLACEHOLDER: &str =
    "You do not have any lists yet. Create your first one above.";
pub const REMOTE_EMPTY_PLACEHOLDER: &str = "You do not have any lists yet. Create one above.";

/// One rendered list block
#[derive(Debug, Clone, PartialEq)]
pub struct ListCard {
    pub id: String,
    pub title: String,
    pub created_label: String,
    pub items: Vec<String>,
    /// Remaining-capacity note, e.g. "2/100 items"
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListCollectionView {
    Empty { placeholder: String },
    Lists(Vec<ListCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    SignedOut,
    SignedIn {
        welcome: String,
        lists: ListCollectionView,
    },
}

pub fn welcome_text(email: &str) -> String {
    format!("Signed in as {}", email)
}

pub fn capacity_note(count: usize) -> String {
    format!("{}/{} items", count, MAX_ITEMS)
}

/// Note shown in place of the capacity note when a list is full
pub fn limit_reached_note() -> String {
    TodoError::ItemLimitReached.to_string()
}

/// Human-readable creation time in the viewer's timezone
pub fn created_label(created_at: DateTime<Utc>) -> String {
    let local = created_at.with_timezone(&Local);
    format!("Created {}", local.format("%-m/%-d/%Y, %-I:%M:%S %p"))
}

pub fn list_card<T: ListSummary>(list: &T) -> ListCard {
    ListCard {
        id: list.list_id(),
        title: list.title().to_string(),
        created_label: created_label(list.created_at()),
        items: list.item_contents(),
        note: capacity_note(list.item_count()),
    }
}

/// Render a list collection, newest first, or the placeholder when empty
pub fn project_lists<T: ListSummary>(lists: &[T], placeholder: &str) -> ListCollectionView {
    if lists.is_empty() {
        return ListCollectionView::Empty {
            placeholder: placeholder.to_string(),
        };
    }
    ListCollectionView::Lists(sort_newest_first(lists).into_iter().map(list_card).collect())
}

/// Whole-page projection of the local variant
pub fn project_local(state: &PersistedState) -> ViewModel {
    match &state.user {
        None => ViewModel::SignedOut,
        Some(user) => ViewModel::SignedIn {
            welcome: welcome_text(&user.email),
            lists: project_lists(state.lists(&user.email), LOCAL_EMPTY_PLACEHOLDER),
        },
    }
}

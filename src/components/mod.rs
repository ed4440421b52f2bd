//! UI Components
//!
//! Reusable Leptos components shared by both variants.

mod credentials_form;
mod list_collection;
mod new_list_form;
mod session_header;
mod todo_list_card;

pub use credentials_form::CredentialsForm;
pub use list_collection::ListCollection;
pub use new_list_form::NewListForm;
pub use session_header::SessionHeader;
pub use todo_list_card::TodoListCard;

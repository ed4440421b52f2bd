//! Domain Layer
//!
//! Server-side errors and request payloads. The list, item and session
//! records are the same types the client decodes.

mod error;
mod input;

pub use error::{ServerError, ServerResult};
pub use input::{parse_body, CredentialsInput, ItemInput, ListInput};
pub use todo_core::{RemoteItem, RemoteList, Session, MAX_ITEMS};

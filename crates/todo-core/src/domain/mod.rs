//! Domain Layer
//!
//! Entities shared by both client variants and the server.
//! No I/O happens here.

mod error;
mod list;
mod record_id;
mod session;
mod timestamp;
mod user;

pub use error::{TodoError, TodoResult};
pub use list::{sort_newest_first, ListSummary, LocalList, RemoteItem, RemoteList};
pub use record_id::RecordId;
pub use session::Session;
pub use user::{normalize_email, Credentials};

//! Simple To-Do Core
//!
//! Platform-neutral pieces shared by the web client and the reference server:
//! - domain: users, lists, items, sessions and errors
//! - store: the local-state variant (state + persistence)
//! - view: pure projection from state to a renderable view model
//! - api: HTTP client for the remote variant (feature `client`)

pub mod config;
pub mod domain;
pub mod session_cache;
pub mod state;
pub mod storage;
pub mod store;
pub mod validation;
pub mod view;

#[cfg(feature = "client")]
pub mod api;

pub use config::ClientConfig;
pub use domain::{
    normalize_email, Credentials, ListSummary, LocalList, RecordId, RemoteItem, RemoteList,
    Session, TodoError, TodoResult,
};
pub use session_cache::SessionCache;
pub use state::PersistedState;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TodoStore;

/// Maximum number of items a single list may hold
pub const MAX_ITEMS: usize = 100;

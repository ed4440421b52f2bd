//! Session Cache
//!
//! Keeps the remote variant's session record in key-value storage.

use crate::domain::{Session, TodoResult};
use crate::storage::KeyValueStorage;

pub struct SessionCache<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SessionCache<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Cached session, if one with an id is stored
    ///
    /// Unparsable entries are treated as signed out.
    pub fn load(&self) -> Option<Session> {
        let raw = self.storage.get(&self.key)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_valid() => Some(session),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Ignoring unreadable session: {}", e);
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> TodoResult<()> {
        let json = serde_json::to_string(session)?;
        self.storage.set(&self.key, &json)
    }

    pub fn clear(&self) -> TodoResult<()> {
        self.storage.remove(&self.key)
    }
}

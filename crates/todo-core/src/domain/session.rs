//! Session Record
//!
//! What the login endpoint returns and what the remote variant caches.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record_id::RecordId;

/// Authenticated session as returned by `/api/login`
///
/// Unknown fields are kept so the cached copy is byte-for-byte what the
/// server sent, minus formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: RecordId,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(id: impl Into<RecordId>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// A session only grants access when it carries an id
    pub fn is_valid(&self) -> bool {
        self.id.is_present()
    }
}

//! Key-Value Storage
//!
//! Abstract interface over durable string storage.
//! The browser implementation lives in the UI crate.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::TodoResult;

/// Durable string storage keyed by name (e.g. `localStorage`)
pub trait KeyValueStorage {
    /// Read a value; storage failures read as absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> TodoResult<()>;

    /// Remove a value if present
    fn remove(&self, key: &str) -> TodoResult<()>;
}

/// In-memory storage
///
/// Clones share the same map, mirroring how every handle to
/// `localStorage` sees the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> TodoResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

//! Browser Storage
//!
//! `KeyValueStorage` backed by `window.localStorage`.

use todo_core::{KeyValueStorage, MemoryStorage, TodoError, TodoResult};
use wasm_bindgen::{JsCast, JsValue};

#[derive(Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    /// Used when the browser refuses access to `localStorage`
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match local {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, state will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(js_error),
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> TodoResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.remove_item(key).map_err(js_error),
            BrowserStorage::Memory(memory) => memory.remove(key),
        }
    }
}

/// e.g. `QuotaExceededError` when storage is full
fn js_error(e: JsValue) -> TodoError {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{:?}", e));
    TodoError::Storage(message)
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::ClientConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Resolved client configuration
    pub config: StoredValue<ClientConfig>,
    /// Trigger to re-fetch lists from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch lists from the API - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: ClientConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            config: StoredValue::new(config),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

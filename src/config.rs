//! Runtime Configuration
//!
//! The API origin comes from `TODO_API_BASE` at build time, otherwise from the
//! page's own origin (the server hosts both).

use todo_core::ClientConfig;

pub fn resolve() -> ClientConfig {
    let base = option_env!("TODO_API_BASE")
        .map(str::to_string)
        .or_else(page_origin);
    match base {
        Some(base) => ClientConfig::new(base),
        None => {
            log::warn!("No page origin available, using default API base");
            ClientConfig::default()
        }
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

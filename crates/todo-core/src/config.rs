//! Client Configuration

/// Storage key of the local-variant state document
pub const DEFAULT_STORAGE_KEY: &str = "simple-todo-state-v1";
/// Storage key of the cached remote session
pub const DEFAULT_SESSION_KEY: &str = "todo-session";

/// Settings shared by both client variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute origin the `/api` paths are appended to, e.g. `http://localhost:4173`
    pub api_base: String,
    pub storage_key: String,
    pub session_key: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4173")
    }
}

//! Remote API Client
//!
//! Bindings to the `/api` endpoints used by the remote variant.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

/// Fallback messages used when the server does not supply one
pub mod fallback {
    pub const LOGIN: &str = "Login failed.";
    pub const REGISTER: &str = "Registration failed.";
    pub const LOGIN_AFTER_REGISTER: &str = "Registered, but login failed.";
    pub const CREATE_LIST: &str = "Could not create list.";
    pub const ADD_ITEM: &str = "Each list is limited to 100 items.";
}

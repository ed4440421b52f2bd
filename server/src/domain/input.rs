//! Request Bodies
//!
//! Missing fields read as empty strings so the handlers can report their own
//! validation messages.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{ServerError, ServerResult};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListInput {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ItemInput {
    pub content: String,
}

/// Decode a JSON request body; an empty body counts as `{}`
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> ServerResult<T> {
    let body: &[u8] = if body.is_empty() { b"{}" } else { body };
    serde_json::from_slice(body).map_err(|_| ServerError::InvalidInput("Invalid JSON".to_string()))
}

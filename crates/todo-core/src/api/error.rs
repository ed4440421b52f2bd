//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success status; `message` is the server's `error` or a fallback
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response
    #[error("Unable to connect to the server.")]
    Connectivity(String),

    /// A success response whose body could not be read
    #[error("Unexpected response from the server.")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Connectivity(e.to_string())
    }
}

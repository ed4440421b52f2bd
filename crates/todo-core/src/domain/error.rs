//! Domain Errors
//!
//! Errors surfaced by the local store and validation helpers.

use thiserror::Error;

use crate::MAX_ITEMS;

/// Common result type for store operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors raised while mutating or persisting to-do state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A required form field was empty after trimming
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("No user is signed in.")]
    NotSignedIn,

    /// The list already holds `MAX_ITEMS` items
    #[error("Item limit reached ({max}/{max})", max = MAX_ITEMS)]
    ItemLimitReached,

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TodoError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        TodoError::Validation {
            field,
            message: message.into(),
        }
    }

    /// True when the error is the capacity rejection
    pub fn is_capacity(&self) -> bool {
        matches!(self, TodoError::ItemLimitReached)
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(e: serde_json::Error) -> Self {
        TodoError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_message_is_distinct() {
        let limit = TodoError::ItemLimitReached;
        assert_eq!(limit.to_string(), "Item limit reached (100/100)");
        assert!(limit.is_capacity());
        assert!(!TodoError::validation("title", "List name is required.").is_capacity());
    }

    #[test]
    fn test_validation_displays_message_only() {
        let err = TodoError::validation("title", "List name is required.");
        assert_eq!(err.to_string(), "List name is required.");
    }
}

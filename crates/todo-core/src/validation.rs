//! Form Validation
//!
//! Trimming rules shared by list titles and item contents.

use crate::domain::{TodoError, TodoResult};

pub const LIST_TITLE_REQUIRED: &str = "List name is required.";

/// Trimmed input, or `None` when nothing is left
pub fn trimmed(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Validate a list title, reporting a field-level error when empty
pub fn list_title(raw: &str) -> TodoResult<String> {
    trimmed(raw).ok_or_else(|| TodoError::validation("title", LIST_TITLE_REQUIRED))
}

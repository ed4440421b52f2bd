//! Server Record Identifier
//!
//! The API hands out ids as JSON numbers, but nothing in the client depends
//! on that, so both numbers and strings are accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Empty string ids do not count as a session id
    pub fn is_present(&self) -> bool {
        match self {
            RecordId::Int(_) => true,
            RecordId::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers_and_strings() {
        let n: RecordId = serde_json::from_str("7").unwrap();
        let s: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(n, RecordId::Int(7));
        assert_eq!(s.to_string(), "abc");
    }

    #[test]
    fn test_empty_text_is_not_present() {
        assert!(!RecordId::from("").is_present());
        assert!(RecordId::from(0).is_present());
    }
}

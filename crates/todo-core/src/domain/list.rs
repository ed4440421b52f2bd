//! List and Item Entities
//!
//! Local lists hold plain item strings; remote lists carry server records.
//! Both expose the same summary so ordering and rendering are shared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record_id::RecordId;
use super::timestamp;

/// Read-only view over a list shared by both variants
pub trait ListSummary {
    fn list_id(&self) -> String;
    fn title(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
    fn item_contents(&self) -> Vec<String>;
    fn item_count(&self) -> usize;
}

/// Lists ordered by creation time, newest first
///
/// `sort_by` is stable, so lists created at the same instant keep their
/// insertion order.
pub fn sort_newest_first<T: ListSummary>(lists: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = lists.iter().collect();
    sorted.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    sorted
}

// ========================
// Local Variant
// ========================

/// A list stored in browser storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalList {
    pub id: String,
    pub title: String,
    #[serde(default = "epoch", deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl LocalList {
    /// Create an empty list with a fresh id
    ///
    /// `title` must already be validated.
    pub fn new(title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            created_at,
            items: Vec::new(),
        }
    }
}

impl ListSummary for LocalList {
    fn list_id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn item_contents(&self) -> Vec<String> {
        self.items.clone()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

// ========================
// Remote Variant
// ========================

/// Item record returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<RecordId>,
    pub content: String,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// List record returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteList {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RecordId>,
    pub title: String,
    #[serde(default = "epoch", deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<RemoteItem>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl ListSummary for RemoteList {
    fn list_id(&self) -> String {
        self.id.to_string()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn item_contents(&self) -> Vec<String> {
        self.items.iter().map(|item| item.content.clone()).collect()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

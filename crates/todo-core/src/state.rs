//! Persisted Local State
//!
//! The whole local-variant state, stored as one JSON document:
//! `{ "user": {email, password} | null, "listsByUser": { email: [list] } }`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Credentials, LocalList, TodoResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Currently signed-in user, if any
    #[serde(default)]
    pub user: Option<Credentials>,
    /// Every user's lists, keyed by normalized email
    #[serde(default)]
    pub lists_by_user: BTreeMap<String, Vec<LocalList>>,
}

impl PersistedState {
    pub fn to_json(&self) -> TodoResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> TodoResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode stored state, falling back to the empty state
    ///
    /// Missing, `null` and corrupt payloads all start the app signed out
    /// with no lists.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Discarding unreadable stored state: {}", e);
                Self::default()
            }
        }
    }

    /// Lists of `email`, creating the empty collection when missing
    pub fn lists_mut(&mut self, email: &str) -> &mut Vec<LocalList> {
        self.lists_by_user.entry(email.to_string()).or_default()
    }

    /// Lists of `email`; a user without a collection has no lists
    pub fn lists(&self, email: &str) -> &[LocalList] {
        self.lists_by_user
            .get(email)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample() -> PersistedState {
        let mut state = PersistedState {
            user: Some(Credentials {
                email: "a@x.com".to_string(),
                password: "pw1".to_string(),
            }),
            ..Default::default()
        };
        let mut list = LocalList::new(
            "Groceries".to_string(),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        );
        list.items = vec!["Milk".to_string(), "Eggs".to_string()];
        state.lists_mut("a@x.com").push(list);
        state.lists_mut("b@x.com");
        state
    }

    #[test]
    fn test_round_trip() {
        let state = sample();
        let json = state.to_json().unwrap();
        assert_eq!(PersistedState::from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert!(value.get("listsByUser").is_some());
        assert_eq!(value["listsByUser"]["a@x.com"][0]["createdAt"], "2024-03-01T09:30:00Z");
        assert_eq!(value["user"]["email"], "a@x.com");
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(PersistedState::load_or_default(None), PersistedState::default());
        assert_eq!(PersistedState::load_or_default(Some("{not json")), PersistedState::default());
        assert_eq!(PersistedState::load_or_default(Some("null")), PersistedState::default());
    }

    #[test]
    fn test_missing_fields_default_individually() {
        let state = PersistedState::load_or_default(Some(r#"{"user":{"email":"a@x.com","password":"p"}}"#));
        assert!(state.user.is_some());
        assert!(state.lists_by_user.is_empty());

        let state = PersistedState::load_or_default(Some(r#"{"listsByUser":{}}"#));
        assert!(state.user.is_none());
    }

    #[test]
    fn test_accepts_browser_generated_timestamps() {
        let raw = r#"{"user":null,"listsByUser":{"a@x.com":[{"id":"1","title":"T","createdAt":"2024-03-01T09:30:00.000Z","items":[]}]}}"#;
        let state = PersistedState::from_json(raw).unwrap();
        assert_eq!(state.lists("a@x.com").len(), 1);
        assert!(state.lists("nobody@x.com").is_empty());
    }

    #[test]
    fn test_odd_timestamp_keeps_other_users() {
        let raw = r#"{
            "user": {"email": "a@x.com", "password": "pw1"},
            "listsByUser": {
                "a@x.com": [{"id": "1", "title": "Groceries", "createdAt": "2024-03-01T09:30:00.000Z", "items": ["Milk"]}],
                "b@x.com": [{"id": "2", "title": "Chores", "createdAt": "2024-03-01", "items": []}]
            }
        }"#;
        let state = PersistedState::load_or_default(Some(raw));
        assert_eq!(state.user.clone().map(|u| u.email).as_deref(), Some("a@x.com"));
        assert_eq!(state.lists("a@x.com")[0].items, vec!["Milk".to_string()]);
        assert_eq!(
            state.lists("b@x.com")[0].created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
    }
}

//! Local Todo Store
//!
//! Owns the local-variant state and persists it on every mutation.
//! All reads and writes go through this type; there is no global state.

use chrono::{DateTime, Utc};

use crate::domain::{sort_newest_first, Credentials, LocalList, TodoError, TodoResult};
use crate::state::PersistedState;
use crate::storage::KeyValueStorage;
use crate::validation;
use crate::MAX_ITEMS;

/// Result of submitting an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddItemOutcome {
    /// Item appended; carries the new item count
    Added(usize),
    /// Blank input, nothing changed
    Ignored,
}

pub struct TodoStore<S> {
    storage: S,
    key: String,
    state: PersistedState,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Load state from `storage`, starting empty when nothing usable is stored
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = PersistedState::load_or_default(storage.get(&key).as_deref());
        log::debug!(
            "Loaded local state: signed_in={}, users={}",
            state.user.is_some(),
            state.lists_by_user.len()
        );
        Self { storage, key, state }
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&Credentials> {
        self.state.user.as_ref()
    }

    /// Sign in with any email/password pair
    ///
    /// Credentials are not checked against anything; the pair simply becomes
    /// the current user and an empty list collection is created if needed.
    /// Nothing changes in memory unless the new state was written.
    pub fn login(&mut self, email: &str, password: &str) -> TodoResult<&Credentials> {
        let creds = Credentials::from_form(email, password)?;
        let mut next = self.state.clone();
        next.lists_mut(&creds.email);
        next.user = Some(creds);
        self.write(&next)?;

        self.state = next;
        let user = self.state.user.as_ref().ok_or(TodoError::NotSignedIn)?;
        log::info!("Signed in as {}", user.email);
        Ok(user)
    }

    /// Clear the current user; every user's lists stay in storage
    pub fn logout(&mut self) -> TodoResult<()> {
        if let Some(user) = self.state.user.take() {
            log::info!("Signed out {}", user.email);
        }
        self.persist()
    }

    /// Create a list for the current user, stamped with the current time
    pub fn create_list(&mut self, title: &str) -> TodoResult<&LocalList> {
        self.create_list_at(title, Utc::now())
    }

    pub fn create_list_at(&mut self, title: &str, created_at: DateTime<Utc>) -> TodoResult<&LocalList> {
        let email = self.signed_in_email()?;
        let title = validation::list_title(title)?;

        let lists = self.state.lists_mut(&email);
        lists.push(LocalList::new(title, created_at));
        self.persist()?;

        let lists = self.state.lists_mut(&email);
        let created = lists.last().ok_or_else(|| TodoError::Storage("list vanished".to_string()))?;
        log::debug!("Created list {} for {}", created.id, email);
        Ok(created)
    }

    /// Append an item to one of the current user's lists
    pub fn add_item(&mut self, list_id: &str, content: &str) -> TodoResult<AddItemOutcome> {
        let email = self.signed_in_email()?;
        let Some(content) = validation::trimmed(content) else {
            return Ok(AddItemOutcome::Ignored);
        };

        let list = self
            .state
            .lists_mut(&email)
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or_else(|| TodoError::ListNotFound(list_id.to_string()))?;

        if list.items.len() >= MAX_ITEMS {
            log::warn!("List {} is full", list_id);
            return Err(TodoError::ItemLimitReached);
        }
        list.items.push(content);
        let count = list.items.len();

        self.persist()?;
        Ok(AddItemOutcome::Added(count))
    }

    /// Current user's lists, newest first; empty when signed out
    pub fn lists(&self) -> Vec<&LocalList> {
        match &self.state.user {
            Some(user) => self.lists_for(&user.email),
            None => Vec::new(),
        }
    }

    /// Lists of any user, newest first
    pub fn lists_for(&self, email: &str) -> Vec<&LocalList> {
        sort_newest_first(self.state.lists(email))
    }

    fn signed_in_email(&self) -> TodoResult<String> {
        self.state
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .ok_or(TodoError::NotSignedIn)
    }

    fn persist(&self) -> TodoResult<()> {
        self.write(&self.state)
    }

    fn write(&self, state: &PersistedState) -> TodoResult<()> {
        let json = state.to_json()?;
        self.storage.set(&self.key, &json)
    }
}

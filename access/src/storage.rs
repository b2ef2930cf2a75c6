//! Persisted credential record and the key-value surface it lives in.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backend is `localStorage`; natively it is
//! [`MemoryStore`]. The record is written on login, read once at boot, and
//! removed on logout. It is the only session state that survives a reload.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::RestoreError;
use crate::profile::UserProfile;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "hrms_token";
/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "hrms_user";
/// Storage key for the optional refresh token.
pub const REFRESH_TOKEN_KEY: &str = "hrms_refresh_token";

/// Synchronous key-value persistence.
///
/// A missing key is a normal "no session" state and reads as `None`.
/// Backends swallow write failures; they log and carry on.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-process store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The durable token/user/refresh-token triple.
#[derive(Clone, Debug, PartialEq)]
pub struct PersistedCredentials {
    pub token: String,
    pub user: UserProfile,
    pub refresh_token: Option<String>,
}

impl PersistedCredentials {
    /// Read the record. `Ok(None)` when the token or user is absent.
    ///
    /// # Errors
    ///
    /// Returns [`RestoreError::PersistedStateCorrupt`] when the stored user
    /// does not parse.
    pub fn read(store: &impl CredentialStore) -> Result<Option<Self>, RestoreError> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = store.get(USER_KEY).filter(|u| !u.is_empty());
        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return Ok(None);
        };
        let user = serde_json::from_str::<UserProfile>(&raw_user)
            .map_err(|e| RestoreError::PersistedStateCorrupt(e.to_string()))?;
        Ok(Some(Self { token, user, refresh_token: store.get(REFRESH_TOKEN_KEY) }))
    }

    /// Write every field of the record. A `None` refresh token clears any
    /// stale one left by an earlier session.
    pub fn write(&self, store: &impl CredentialStore) {
        store.set(TOKEN_KEY, &self.token);
        write_user(store, &self.user);
        match &self.refresh_token {
            Some(refresh) => store.set(REFRESH_TOKEN_KEY, refresh),
            None => store.remove(REFRESH_TOKEN_KEY),
        }
    }

    /// Remove all three keys.
    pub fn clear(store: &impl CredentialStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        store.remove(REFRESH_TOKEN_KEY);
    }
}

/// Overwrite only the stored profile, leaving the tokens alone.
pub fn write_user(store: &impl CredentialStore, user: &UserProfile) {
    match serde_json::to_string(user) {
        Ok(raw) => store.set(USER_KEY, &raw),
        Err(e) => log::error!("failed to serialize user profile: {e}"),
    }
}

//! The session store: single source of truth for the signed-in identity.
//!
//! ARCHITECTURE
//! ============
//! [`Session`] is a read-only snapshot. [`SessionStore`] owns it together with
//! the credential backend and is the only thing that can change it, through
//! `initialize`, `login`/`complete_login`, `logout`, and `update_user`.
//!
//! ORDERING
//! ========
//! On login the credential record is written before the in-memory swap, so a
//! consumer reacting to the new session always finds matching storage.
//! `complete_login` is synchronous; the browser client runs it inside one
//! signal update so persist-then-swap cannot interleave with another login.
//! Two overlapping logins resolve last-completed-wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::{AuthApi, Credentials, LoginResponse, request_login};
use crate::error::AuthError;
use crate::profile::UserProfile;
use crate::role::Role;
use crate::storage::{self, CredentialStore, PersistedCredentials};

/// Snapshot of the current authentication state.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    user: Option<UserProfile>,
    token: Option<String>,
    is_loading: bool,
    role: Option<Role>,
    organization: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

impl Session {
    /// Boot state: nothing known yet, restore pending.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, token: None, is_loading: true, role: None, organization: None }
    }

    /// Signed out, settled.
    #[must_use]
    pub fn empty() -> Self {
        Self { is_loading: false, ..Self::loading() }
    }

    fn populated(user: UserProfile, token: String) -> Self {
        let mut session = Self { token: Some(token), ..Self::empty() };
        session.set_user(user);
        session
    }

    // The only writer of `user`; keeps the derived fields in step.
    fn set_user(&mut self, user: UserProfile) {
        self.role = user.role();
        self.organization = user.organization_id.clone();
        self.user = Some(user);
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Parsed role of the current user. `None` when signed out or when the
    /// stored role name is unknown.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Minimum-level check: a session holding a more senior role satisfies
    /// every junior requirement.
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        self.role.is_some_and(|role| role.satisfies(required))
    }

    #[must_use]
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.iter().any(|&role| self.has_role(role))
    }

    #[must_use]
    pub fn can_access_route(&self, allowed: &[Role]) -> bool {
        self.is_authenticated() && self.has_any_role(allowed)
    }

    #[must_use]
    pub fn is_global_admin(&self) -> bool {
        self.has_role(Role::GlobalAdmin)
    }

    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.has_role(Role::SuperAdmin)
    }

    #[must_use]
    pub fn is_hr(&self) -> bool {
        self.has_role(Role::Hr)
    }

    #[must_use]
    pub fn is_employee(&self) -> bool {
        self.has_role(Role::Employee)
    }
}

/// Successful login result.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginOutcome {
    pub user: UserProfile,
    pub token: String,
}

/// Owner of the session and its persisted record.
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
    session: Session,
}

impl<S: CredentialStore> SessionStore<S> {
    /// A store in the boot `loading` state. Call [`Self::initialize`] next.
    pub fn new(store: S) -> Self {
        Self { store, session: Session::loading() }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.store
    }

    /// Restore from the persisted record. No network call; the stored token
    /// is trusted as-is. A corrupt record is cleared and treated as signed
    /// out.
    pub fn initialize(&mut self) -> &Session {
        self.session = match PersistedCredentials::read(&self.store) {
            Ok(Some(record)) => {
                log::info!("restored session for role {}", record.user.role);
                Session::populated(record.user, record.token)
            }
            Ok(None) => {
                log::debug!("no persisted session");
                Session::empty()
            }
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                PersistedCredentials::clear(&self.store);
                Session::empty()
            }
        };
        &self.session
    }

    /// Validate credentials, call the auth service, then persist and swap.
    ///
    /// # Errors
    ///
    /// See [`Self::complete_login`]; also [`AuthError::Invalid`] when the
    /// credentials fail validation, in which case nothing is sent.
    pub async fn login(&mut self, api: &impl AuthApi, credentials: &Credentials) -> Result<LoginOutcome, AuthError> {
        let response = request_login(api, credentials).await;
        self.complete_login(response)
    }

    /// Apply the outcome of a login request.
    ///
    /// # Errors
    ///
    /// Propagates the request error unchanged, or returns
    /// [`AuthError::InvalidResponseFormat`] when the response lacks a user or
    /// a token. The session and the persisted record are untouched on error.
    pub fn complete_login(&mut self, response: Result<LoginResponse, AuthError>) -> Result<LoginOutcome, AuthError> {
        let response = response.inspect_err(|e| log::warn!("login failed: {e}"))?;
        let Some((user, token, refresh_token)) = response.into_parts() else {
            log::warn!("login response missing user or token");
            return Err(AuthError::InvalidResponseFormat);
        };

        let record = PersistedCredentials { token, user, refresh_token };
        record.write(&self.store);
        self.session = Session::populated(record.user.clone(), record.token.clone());
        log::info!("signed in with role {}", record.user.role);

        Ok(LoginOutcome { user: record.user, token: record.token })
    }

    /// Clear the persisted record and the session. Always succeeds; returns
    /// the token that was active so the caller can notify the server.
    pub fn logout(&mut self) -> Option<String> {
        PersistedCredentials::clear(&self.store);
        let previous = std::mem::replace(&mut self.session, Session::empty());
        if previous.is_authenticated() {
            log::info!("signed out");
        }
        previous.token
    }

    /// Replace the profile without re-authenticating. Ignored when signed
    /// out, since a profile without a token is not a session. Returns whether
    /// the profile was applied.
    pub fn update_user(&mut self, user: UserProfile) -> bool {
        if !self.session.is_authenticated() {
            log::warn!("ignoring profile update while signed out");
            return false;
        }
        storage::write_user(&self.store, &user);
        self.session.set_user(user);
        true
    }
}

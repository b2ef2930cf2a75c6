//! Reactive authentication context.
//!
//! The session store lives in one `RwSignal` provided at the app root. Every
//! transition happens inside a single synchronous signal update, so the
//! persist-then-swap step of login cannot interleave with another update on
//! the UI thread.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{AuthApi, AuthError, Credentials, LoginOutcome, SessionStore, request_login};
use leptos::prelude::*;

use crate::util::storage::LocalStorage;

/// Session store bound to browser storage.
pub type AuthState = SessionStore<LocalStorage>;

/// Build the auth signal and restore any persisted session.
pub fn new_auth_signal() -> RwSignal<AuthState> {
    let mut state = AuthState::new(LocalStorage);
    state.initialize();
    RwSignal::new(state)
}

/// Create the auth signal and provide it as context for the whole app.
pub fn provide_auth() -> RwSignal<AuthState> {
    let auth = new_auth_signal();
    provide_context(auth);
    auth
}

/// Sign in through `api` and swap the session on success.
///
/// # Errors
///
/// Returns the validation, transport, rejection, or format error; the
/// session is unchanged in every error case.
pub async fn login(
    auth: RwSignal<AuthState>,
    api: &impl AuthApi,
    credentials: &Credentials,
) -> Result<LoginOutcome, AuthError> {
    let response = request_login(api, credentials).await;
    auth.try_update(|state| state.complete_login(response))
        .unwrap_or_else(|| Err(AuthError::Transport("session context was disposed".to_owned())))
}

/// Sign out locally. Returns the token that was active so the caller can
/// notify the server without waiting on it.
pub fn logout(auth: RwSignal<AuthState>) -> Option<String> {
    auth.try_update(AuthState::logout).flatten()
}

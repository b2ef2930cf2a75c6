//! Error types for authentication and session restore.
//!
//! ERROR HANDLING
//! ==============
//! `AuthError` is the only error a UI caller ever sees, and only from login.
//! `RestoreError` is raised while reading persisted credentials and is always
//! recovered by treating the session as signed out.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Generic text shown for connectivity failures.
pub const CONNECTIVITY_MESSAGE: &str = "Unable to reach the server. Check your connection and try again.";

/// Failure of a login attempt. The session is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered but the payload lacks a user or a token.
    #[error("invalid login response format")]
    InvalidResponseFormat,
    /// Network failure, unreadable body, or a 5xx response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),
    /// The server rejected the credentials (4xx).
    #[error("login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// Credentials failed client-side validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] CredentialsError),
}

impl AuthError {
    /// True for network, timeout, and server-side failures.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }

    /// Text suitable for the login form's error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidResponseFormat => "Login failed. Please try again.".to_owned(),
            Self::Transport(_) | Self::Timeout(_) => CONNECTIVITY_MESSAGE.to_owned(),
            Self::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } => "Invalid credentials.".to_owned(),
            Self::Invalid(err) => err.message().to_owned(),
        }
    }
}

/// Login form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsField {
    Identifier,
    Password,
}

/// Client-side credential validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CredentialsError {
    pub field: CredentialsField,
    message: &'static str,
}

impl CredentialsError {
    pub(crate) const fn new(field: CredentialsField, message: &'static str) -> Self {
        Self { field, message }
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// Failure while reading the persisted credential record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RestoreError {
    /// The stored user JSON does not parse as a profile.
    #[error("persisted user record is corrupt: {0}")]
    PersistedStateCorrupt(String),
}

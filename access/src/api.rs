//! Remote authentication collaborator.
//!
//! The HTTP client lives in the `client` crate; this module fixes the
//! request/response shapes and the trait the session store drives.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, CredentialsError, CredentialsField};
use crate::profile::UserProfile;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

const MIN_IDENTIFIER_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 6;

/// Login request body. `identifier` is an email, username, or phone number.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), password: password.into() }
    }

    /// Apply the login form rules and return credentials with a trimmed
    /// identifier. The password is never trimmed.
    ///
    /// # Errors
    ///
    /// Returns the first failing field: identifier before password.
    pub fn validate(&self) -> Result<Self, CredentialsError> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err(CredentialsError::new(
                CredentialsField::Identifier,
                "Email, username, or mobile number is required",
            ));
        }
        if identifier.chars().count() < MIN_IDENTIFIER_LEN {
            return Err(CredentialsError::new(
                CredentialsField::Identifier,
                "Identifier must be at least 2 characters",
            ));
        }
        if self.password.is_empty() {
            return Err(CredentialsError::new(CredentialsField::Password, "Password is required"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::new(
                CredentialsField::Password,
                "Password must be at least 6 characters",
            ));
        }
        Ok(Self::new(identifier, self.password.clone()))
    }
}

/// Body returned by the login endpoint. Every field is optional on the wire;
/// the session store decides whether the response is usable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Token and user, when both are present and the token is non-empty.
    #[must_use]
    pub fn into_parts(self) -> Option<(UserProfile, String, Option<String>)> {
        match (self.user, self.token) {
            (Some(user), Some(token)) if !token.is_empty() => Some((user, token, self.refresh_token)),
            _ => None,
        }
    }
}

/// The remote auth service.
///
/// Calls run on the single-threaded UI executor, so futures need not be
/// `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a token and profile.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;

    /// Best-effort server-side logout. Failures are logged, never returned.
    async fn logout(&self, token: Option<&str>);
}

/// Validate `credentials` and send the normalized form to `api`. Nothing is
/// sent when validation fails.
///
/// # Errors
///
/// [`AuthError::Invalid`] for credentials that fail validation, otherwise
/// whatever the service returns.
pub async fn request_login(api: &impl AuthApi, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
    let credentials = credentials.validate()?;
    api.login(&credentials).await
}

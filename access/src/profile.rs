//! Signed-in user profile as returned by the auth endpoint.
//!
//! Only the fields the client reasons about are typed. Everything else the
//! server sends is kept in `extra` so a persisted profile reloads unchanged.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::role::Role;

/// User profile payload. JSON keys are camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-side user identifier.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "_id")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Raw role wire name. May name a role this client does not know.
    pub role: String,
    /// Tenant the user belongs to. Global admins have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// Remaining server fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Minimal profile with just a role and organization.
    #[must_use]
    pub fn new(role: impl Into<String>, organization_id: Option<String>) -> Self {
        Self {
            id: None,
            email: None,
            username: None,
            phone: None,
            first_name: None,
            last_name: None,
            role: role.into(),
            organization_id,
            extra: Map::new(),
        }
    }

    /// Parsed role, or `None` when the wire name is unknown.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Name shown in the header and dashboard greeting.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("User")
            .to_owned()
    }
}

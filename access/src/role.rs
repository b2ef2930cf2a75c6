//! Role hierarchy shared with the server.
//!
//! Roles are totally ordered by an explicit privilege level, not by name or
//! declaration order. Every role parse, label, and landing-path lookup in the
//! client goes through this module.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A user role, ordered by privilege level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular employee of an organization.
    #[serde(rename = "Employee")]
    Employee,
    /// HR staff of an organization.
    #[serde(rename = "HR")]
    Hr,
    /// Organization owner; registers HR staff and manages master data.
    #[serde(rename = "Super_Admin")]
    SuperAdmin,
    /// Platform operator across all organizations.
    #[serde(rename = "Global_Admin")]
    GlobalAdmin,
}

impl Role {
    /// All roles in ascending privilege order.
    pub const ALL: [Role; 4] = [Role::Employee, Role::Hr, Role::SuperAdmin, Role::GlobalAdmin];

    /// Privilege level; higher is more senior.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Employee => 1,
            Self::Hr => 2,
            Self::SuperAdmin => 3,
            Self::GlobalAdmin => 4,
        }
    }

    /// Wire name used by the server and in persisted profiles.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Hr => "HR",
            Self::SuperAdmin => "Super_Admin",
            Self::GlobalAdmin => "Global_Admin",
        }
    }

    /// Human-readable label for headers and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Hr => "HR",
            Self::SuperAdmin => "Super Admin",
            Self::GlobalAdmin => "Global Admin",
        }
    }

    /// Landing page for a signed-in user holding this role.
    #[must_use]
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::GlobalAdmin => "/admin/dashboard",
            Self::SuperAdmin => "/super-admin/dashboard",
            Self::Hr => "/hr/dashboard",
            Self::Employee => "/employee/dashboard",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }

    /// Minimum-level check: does holding `self` satisfy a `required` role?
    #[must_use]
    pub const fn satisfies(self, required: Role) -> bool {
        self.level() >= required.level()
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level().cmp(&other.level())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

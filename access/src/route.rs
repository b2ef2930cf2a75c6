//! Static route table.
//!
//! Each screen declares whether it is public or which roles may open it.
//! The table is fixed at compile time; `RouteDescriptor::protected` refuses an
//! empty role list during const evaluation.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::role::Role;
use crate::session::Session;

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Roles(&'static [Role]),
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub title: &'static str,
    pub access: Access,
}

impl RouteDescriptor {
    #[must_use]
    pub const fn public(path: &'static str, title: &'static str) -> Self {
        Self { path, title, access: Access::Public }
    }

    /// # Panics
    ///
    /// Panics (at compile time in a `const`/`static`) when `roles` is empty.
    #[must_use]
    pub const fn protected(path: &'static str, title: &'static str, roles: &'static [Role]) -> Self {
        assert!(!roles.is_empty(), "protected route needs at least one role");
        Self { path, title, access: Access::Roles(roles) }
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self.access, Access::Public)
    }

    /// Roles allowed to open the route; empty for public routes.
    #[must_use]
    pub const fn allowed_roles(&self) -> &'static [Role] {
        match self.access {
            Access::Public => &[],
            Access::Roles(roles) => roles,
        }
    }

    /// Whether `session` may view this route without being redirected.
    #[must_use]
    pub fn is_accessible(&self, session: &Session) -> bool {
        match self.access {
            Access::Public => !session.is_authenticated(),
            Access::Roles(roles) => session.can_access_route(roles),
        }
    }
}

const ALL_ROLES: &[Role] = &Role::ALL;
const GLOBAL_ADMIN: &[Role] = &[Role::GlobalAdmin];
const SUPER_ADMIN: &[Role] = &[Role::SuperAdmin];
const ADMINS: &[Role] = &[Role::SuperAdmin, Role::GlobalAdmin];
const HR: &[Role] = &[Role::Hr];
const EMPLOYEE: &[Role] = &[Role::Employee];

/// Every screen of the client.
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::public("/login", "Sign In"),
    RouteDescriptor::protected("/dashboard", "Dashboard", ALL_ROLES),
    // Global admin
    RouteDescriptor::protected("/admin/dashboard", "Admin Dashboard", GLOBAL_ADMIN),
    RouteDescriptor::protected("/admin/organizations", "Organizations", GLOBAL_ADMIN),
    RouteDescriptor::protected("/admin/users", "All Users", GLOBAL_ADMIN),
    RouteDescriptor::protected("/admin/document-requirements", "Document Requirements", GLOBAL_ADMIN),
    // Super admin
    RouteDescriptor::protected("/super-admin/dashboard", "Super Admin Dashboard", SUPER_ADMIN),
    RouteDescriptor::protected("/super-admin/register-hr", "Register HR", SUPER_ADMIN),
    RouteDescriptor::protected("/super-admin/users", "Manage Users", SUPER_ADMIN),
    RouteDescriptor::protected("/super-admin/document-requirements", "Document Requirements", ADMINS),
    RouteDescriptor::protected("/super-admin/master-data", "Master Data", ADMINS),
    // HR
    RouteDescriptor::protected("/hr/dashboard", "HR Dashboard", HR),
    RouteDescriptor::protected("/hr/employees", "Employee Management", HR),
    RouteDescriptor::protected("/hr/register-employee", "Register Employee", HR),
    RouteDescriptor::protected("/hr/payroll", "Payroll", HR),
    RouteDescriptor::protected("/hr/leave-requests", "Leave Requests", HR),
    // Employee
    RouteDescriptor::protected("/employee/dashboard", "Employee Dashboard", EMPLOYEE),
    RouteDescriptor::protected("/employee/profile", "My Profile", EMPLOYEE),
    RouteDescriptor::protected("/employee/apply-leave", "Apply Leave", EMPLOYEE),
];

/// Look up a route by exact path. A single trailing slash is ignored.
#[must_use]
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    ROUTES.iter().find(|route| route.path == path)
}

/// Protected routes the session may open, in table order.
#[must_use]
pub fn accessible_routes(session: &Session) -> Vec<&'static RouteDescriptor> {
    ROUTES
        .iter()
        .filter(|route| !route.is_public() && route.is_accessible(session))
        .collect()
}

//! Role-gated sidebar navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::role::Role;
use crate::route;
use crate::session::Session;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

const COMMON: &[NavItem] = &[item("Dashboard", "/dashboard")];

const GLOBAL_ADMIN: &[NavItem] = &[
    item("Organizations", "/admin/organizations"),
    item("All Users", "/admin/users"),
    item("Document Requirements", "/admin/document-requirements"),
    item("Master Data", "/super-admin/master-data"),
];

const SUPER_ADMIN: &[NavItem] = &[
    item("Register HR", "/super-admin/register-hr"),
    item("Manage Users", "/super-admin/users"),
    item("Document Requirements", "/super-admin/document-requirements"),
    item("Master Data", "/super-admin/master-data"),
];

const HR: &[NavItem] = &[
    item("Register Employee", "/hr/register-employee"),
    item("Employee Management", "/hr/employees"),
    item("Payroll", "/hr/payroll"),
    item("Leave Requests", "/hr/leave-requests"),
];

const EMPLOYEE: &[NavItem] = &[
    item("My Profile", "/employee/profile"),
    item("Apply Leave", "/employee/apply-leave"),
];

fn section(role: Role) -> &'static [NavItem] {
    match role {
        Role::GlobalAdmin => GLOBAL_ADMIN,
        Role::SuperAdmin => SUPER_ADMIN,
        Role::Hr => HR,
        Role::Employee => EMPLOYEE,
    }
}

/// Links for the signed-in user: the common entries, then the section of
/// their own role. Links the session cannot open are dropped.
#[must_use]
pub fn nav_items(session: &Session) -> Vec<NavItem> {
    let Some(role) = session.role().filter(|_| session.is_authenticated()) else {
        return Vec::new();
    };
    COMMON
        .iter()
        .chain(section(role))
        .filter(|item| route::find(item.path).is_some_and(|r| r.is_accessible(session)))
        .copied()
        .collect()
}

/// Whether `item` should be highlighted for the current location.
#[must_use]
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    current_path.trim_end_matches('/') == item.path
}

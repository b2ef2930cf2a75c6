//! Route authorization gate.
//!
//! A pure decision function evaluated before any screen renders. It covers
//! both directions: signed-out users asking for protected screens, and
//! signed-in users landing on public ones such as the login page.
//!
//! Every redirect to a "home" screen goes through [`landing_path`], so the
//! public-route guard and the forbidden-route guard share one table.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::role::Role;
use crate::route::{self, Access, RouteDescriptor};
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";
/// Where paths missing from the route table are sent.
pub const FALLBACK_PATH: &str = "/dashboard";
/// Query parameter carrying the originally requested path through login.
pub const NEXT_PARAM: &str = "next";

/// Landing screen for a role; the login page when the role is missing or
/// unknown.
#[must_use]
pub fn landing_path(role: Option<Role>) -> &'static str {
    role.map_or(LOGIN_PATH, Role::dashboard_path)
}

/// Navigate elsewhere instead of rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    /// Path the user originally asked for, to resume after login.
    pub from: Option<String>,
}

impl Redirect {
    const fn to(to: &'static str) -> Self {
        Self { to, from: None }
    }

    /// Target URL including the `next` query parameter when set.
    #[must_use]
    pub fn href(&self) -> String {
        match &self.from {
            Some(from) => format!("{}?{NEXT_PARAM}={}", self.to, urlencoding::encode(from)),
            None => self.to.to_owned(),
        }
    }
}

/// Outcome of evaluating a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session restore still running; show a placeholder and re-evaluate.
    Loading,
    Render,
    Redirect(Redirect),
}

/// Decide what to do with a navigation to `route`.
#[must_use]
pub fn decide(session: &Session, route: &RouteDescriptor) -> Decision {
    if session.is_loading() {
        return Decision::Loading;
    }
    match route.access {
        Access::Public => {
            if !session.is_authenticated() {
                return Decision::Render;
            }
            let target = landing_path(session.role());
            // A session whose role is unknown lands on login; let it render
            // there instead of bouncing forever.
            if target == route.path {
                Decision::Render
            } else {
                Decision::Redirect(Redirect::to(target))
            }
        }
        Access::Roles(allowed) => {
            if !session.is_authenticated() {
                Decision::Redirect(Redirect { to: LOGIN_PATH, from: Some(route.path.to_owned()) })
            } else if !session.can_access_route(allowed) {
                Decision::Redirect(Redirect::to(landing_path(session.role())))
            } else {
                Decision::Render
            }
        }
    }
}

/// Decide for a raw path. Paths missing from the route table go to
/// [`FALLBACK_PATH`], resolved for the current session in the same step.
#[must_use]
pub fn decide_path(session: &Session, path: &str) -> Decision {
    if let Some(route) = route::find(path) {
        return decide(session, route);
    }
    match route::find(FALLBACK_PATH).map(|fallback| decide(session, fallback)) {
        Some(Decision::Render) => Decision::Redirect(Redirect::to(FALLBACK_PATH)),
        Some(decision) => decision,
        None if session.is_loading() => Decision::Loading,
        None => Decision::Redirect(Redirect::to(landing_path(session.role()))),
    }
}

/// [`decide_path`] for a navigation that may carry a remembered `next`
/// path. A signed-in user on a public route resumes at `next` when the
/// session may open it; every other outcome is unchanged.
#[must_use]
pub fn decide_resuming(session: &Session, path: &str, next: Option<&str>) -> Decision {
    match decide_path(session, path) {
        Decision::Redirect(redirect) if route::find(path).is_some_and(RouteDescriptor::is_public) => {
            Decision::Redirect(Redirect { to: post_login_target(session, next), ..redirect })
        }
        decision => decision,
    }
}

/// Where to go right after a successful login: the remembered path when it
/// names a protected screen this session may open, else the role landing.
#[must_use]
pub fn post_login_target(session: &Session, next: Option<&str>) -> &'static str {
    next.and_then(route::find)
        .filter(|route| !route.is_public() && route.is_accessible(session))
        .map_or_else(|| landing_path(session.role()), |route| route.path)
}

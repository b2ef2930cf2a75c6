//! Dashboard screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` is the shared entry point every role may open; it forwards to
//! the role's own landing screen. Role landing screens greet the user and
//! offer the same links as the sidebar as quick-action cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use access::gate;
use access::nav::{self, NavItem};
use access::{Session, UserProfile};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

fn greeting(user: Option<&UserProfile>) -> String {
    let name = user
        .and_then(|u| u.first_name.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| user.map(UserProfile::display_name).unwrap_or_default(), str::to_owned);
    if name.is_empty() { "Welcome back!".to_owned() } else { format!("Welcome back, {name}!") }
}

/// Quick-action cards: every nav link except the dashboard itself.
fn quick_actions(session: &Session) -> Vec<NavItem> {
    nav::nav_items(session).into_iter().filter(|item| item.path != "/dashboard").collect()
}

/// `/dashboard`: forward to the role landing screen.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let target = auth.with_untracked(|state| gate::landing_path(state.session().role()));

    view! {
        <Redirect
            path=target
            options=NavigateOptions { replace: true, ..NavigateOptions::default() }
        />
    }
}

/// Landing screen for one role.
#[component]
pub fn RoleDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let heading = move || auth.with(|state| greeting(state.session().user()));
    let scope = move || {
        auth.with(|state| {
            let session = state.session();
            let role = session.role().map_or("Unknown role", access::Role::label);
            match session.organization() {
                Some(org) => format!("{role} · organization {org}"),
                None => role.to_owned(),
            }
        })
    };
    let actions = Memo::new(move |_| auth.with(|state| quick_actions(state.session())));

    view! {
        <section class="dashboard">
            <div class="dashboard__welcome">
                <h2>{heading}</h2>
                <p class="dashboard__scope">{scope}</p>
            </div>
            <div class="dashboard__cards">
                {move || {
                    actions
                        .get()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a class="dashboard__card" href=item.path>
                                    <span class="dashboard__card-label">{item.label}</span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

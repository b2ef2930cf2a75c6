//! Root application component with routing and context providers.
//!
//! Every path in `access::route::ROUTES` is mounted here behind a
//! `RouteGate`; protected screens are wrapped in the signed-in chrome.

use access::route;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::app_shell::AppShell;
use crate::components::route_gate::{RouteGate, UnknownRoute};
use crate::config::ClientConfig;
use crate::pages::dashboard::{DashboardPage, RoleDashboard};
use crate::pages::login::LoginPage;
use crate::pages::section::SectionPage;
use crate::state::auth::provide_auth;

fn page_for(path: &'static str) -> AnyView {
    match path {
        "/dashboard" => view! { <DashboardPage/> }.into_any(),
        "/admin/dashboard" | "/super-admin/dashboard" | "/hr/dashboard" | "/employee/dashboard" => {
            view! { <RoleDashboard/> }.into_any()
        }
        _ => view! { <SectionPage path=path/> }.into_any(),
    }
}

/// A protected screen: gate, then chrome, then the page.
#[component]
fn Screen(path: &'static str) -> impl IntoView {
    let title = route::find(path).map_or("HRMS", |r| r.title);

    view! {
        <RouteGate path=path>
            <AppShell title=title>{page_for(path)}</AppShell>
        </RouteGate>
    }
}

/// Root application component.
///
/// Provides the client config and the auth context, restores any persisted
/// session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_build_env());
    provide_auth();

    view! {
        <Title text="HRMS"/>

        <Router>
            <Routes fallback=|| view! { <UnknownRoute/> }>
                <Route
                    path=path!("/login")
                    view=|| view! { <RouteGate path="/login"><LoginPage/></RouteGate> }
                />
                <Route path=path!("/dashboard") view=|| view! { <Screen path="/dashboard"/> }/>

                <Route path=path!("/admin/dashboard") view=|| view! { <Screen path="/admin/dashboard"/> }/>
                <Route
                    path=path!("/admin/organizations")
                    view=|| view! { <Screen path="/admin/organizations"/> }
                />
                <Route path=path!("/admin/users") view=|| view! { <Screen path="/admin/users"/> }/>
                <Route
                    path=path!("/admin/document-requirements")
                    view=|| view! { <Screen path="/admin/document-requirements"/> }
                />

                <Route
                    path=path!("/super-admin/dashboard")
                    view=|| view! { <Screen path="/super-admin/dashboard"/> }
                />
                <Route
                    path=path!("/super-admin/register-hr")
                    view=|| view! { <Screen path="/super-admin/register-hr"/> }
                />
                <Route path=path!("/super-admin/users") view=|| view! { <Screen path="/super-admin/users"/> }/>
                <Route
                    path=path!("/super-admin/document-requirements")
                    view=|| view! { <Screen path="/super-admin/document-requirements"/> }
                />
                <Route
                    path=path!("/super-admin/master-data")
                    view=|| view! { <Screen path="/super-admin/master-data"/> }
                />

                <Route path=path!("/hr/dashboard") view=|| view! { <Screen path="/hr/dashboard"/> }/>
                <Route path=path!("/hr/employees") view=|| view! { <Screen path="/hr/employees"/> }/>
                <Route
                    path=path!("/hr/register-employee")
                    view=|| view! { <Screen path="/hr/register-employee"/> }
                />
                <Route path=path!("/hr/payroll") view=|| view! { <Screen path="/hr/payroll"/> }/>
                <Route path=path!("/hr/leave-requests") view=|| view! { <Screen path="/hr/leave-requests"/> }/>

                <Route path=path!("/employee/dashboard") view=|| view! { <Screen path="/employee/dashboard"/> }/>
                <Route path=path!("/employee/profile") view=|| view! { <Screen path="/employee/profile"/> }/>
                <Route
                    path=path!("/employee/apply-leave")
                    view=|| view! { <Screen path="/employee/apply-leave"/> }
                />
            </Routes>
        </Router>
    }
}

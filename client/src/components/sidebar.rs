//! Collapsible sidebar with role-gated navigation links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from `access::nav`, which only lists screens the session can
//! open, so the sidebar never offers a link the gate would bounce.

use access::nav::{self, NavItem};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

#[component]
pub fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let items = Memo::new(move |_| auth.with(|state| nav::nav_items(state.session())));
    let identity = move || {
        auth.with(|state| {
            let session = state.session();
            let name = session.user().map(access::UserProfile::display_name).unwrap_or_default();
            let role = session.role().map(access::Role::label).unwrap_or("Unknown role");
            (name, role)
        })
    };

    let link = move |item: NavItem| {
        let class = move || {
            if nav::is_active(&item, &pathname.get()) {
                "sidebar__link sidebar__link--active"
            } else {
                "sidebar__link"
            }
        };
        view! {
            <li>
                <a href=item.path class=class title=item.label>
                    <span class="sidebar__label">{item.label}</span>
                </a>
            </li>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <Show when=move || !collapsed.get()>
                    <span class="sidebar__logo">"H"</span>
                    <span class="sidebar__title">"HRMS"</span>
                </Show>
                <button
                    class="btn sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "›" } else { "‹" }}
                </button>
            </div>
            <nav class="sidebar__nav">
                <ul>{move || items.get().into_iter().map(link).collect_view()}</ul>
            </nav>
            <Show when=move || !collapsed.get()>
                <div class="sidebar__user">
                    <p class="sidebar__user-name">{move || identity().0}</p>
                    <p class="sidebar__user-role">{move || identity().1}</p>
                </div>
            </Show>
        </aside>
    }
}

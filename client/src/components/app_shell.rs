//! Signed-in page chrome: sidebar, header, and content area.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn AppShell(title: &'static str, children: Children) -> impl IntoView {
    let collapsed = RwSignal::new(false);

    view! {
        <div class=move || if collapsed.get() { "app-shell app-shell--collapsed" } else { "app-shell" }>
            <Sidebar collapsed=collapsed/>
            <div class="app-shell__main">
                <Header title=title/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}

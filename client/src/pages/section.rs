//! Shell for the HR API screens (organizations, payroll, leave, ...).
//!
//! The screens themselves are served by the remote HR API; this page gives
//! each gated route its title and content slot.

use access::route;
use leptos::prelude::*;

#[component]
pub fn SectionPage(path: &'static str) -> impl IntoView {
    let title = route::find(path).map_or("Not found", |r| r.title);

    view! {
        <section class="section-page" data-path=path>
            <h2 class="section-page__title">{title}</h2>
            <div class="section-page__body"></div>
        </section>
    }
}

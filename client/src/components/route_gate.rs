//! Gate component applying the route authorization decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in the app mounts through [`RouteGate`], so the public and
//! protected guards run the same decision function and share one landing
//! table.

use access::Decision;
use access::gate::{self, NEXT_PARAM};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_location, use_query_map};

use crate::state::auth::AuthState;

/// Full-screen placeholder shown while the session restore runs.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
        </div>
    }
}

fn render(decision: Decision, children: &ChildrenFn) -> AnyView {
    match decision {
        Decision::Loading => view! { <LoadingSpinner/> }.into_any(),
        Decision::Render => children().into_any(),
        Decision::Redirect(target) => {
            log::debug!("gate redirect to {}", target.href());
            view! {
                <Redirect
                    path=target.href()
                    options=NavigateOptions { replace: true, ..NavigateOptions::default() }
                />
            }
            .into_any()
        }
    }
}

/// Render `children` only when the current session may view `path`.
#[component]
pub fn RouteGate(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let decision = Memo::new(move |_| {
        let next = query.with(|q| q.get(NEXT_PARAM));
        auth.with(|state| gate::decide_resuming(state.session(), path, next.as_deref()))
    });

    move || render(decision.get(), &children)
}

/// Fallback for paths missing from the route table.
#[component]
pub fn UnknownRoute() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        auth.with(|state| gate::decide_path(state.session(), &path))
    });
    let nothing: ChildrenFn = std::sync::Arc::new(|| ().into_any());

    move || render(decision.get(), &nothing)
}

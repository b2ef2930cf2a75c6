//! Top bar with the screen title, role badge, and sign-out.

use access::gate::LOGIN_PATH;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::{AuthState, logout};

#[component]
pub fn Header(title: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let badge = move || auth.with(|state| state.session().role().map(access::Role::label));
    let organization = move || auth.with(|state| state.session().organization().map(str::to_owned));

    let on_logout = move |_| {
        // Local sign-out is authoritative; the server is told afterwards.
        let token = logout(auth);
        #[cfg(feature = "csr")]
        {
            let api = crate::net::api::HttpAuthApi::new(config.clone());
            leptos::task::spawn_local(async move {
                access::AuthApi::logout(&api, token.as_deref()).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, &config);
        }
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <header class="header">
            <h1 class="header__title">{title}</h1>
            <span class="header__spacer"></span>
            {move || organization().map(|org| view! { <span class="header__org">{org}</span> })}
            {move || badge().map(|label| view! { <span class="header__badge">{label}</span> })}
            <button class="btn header__logout" on:click=on_logout title="Sign out">
                "Sign out"
            </button>
        </header>
    }
}

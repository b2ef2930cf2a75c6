//! Login page: identifier (email, username, or phone) plus password.
//!
//! On success the page does not navigate itself. The session swap makes the
//! route gate re-evaluate `/login`, which forwards to the remembered `next`
//! path or the role landing screen.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use access::{Credentials, CredentialsError, CredentialsField};
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::ClientConfig;
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;

/// Validation message for `field`, if the last validation failed on it.
fn field_message(error: Option<&CredentialsError>, field: CredentialsField) -> Option<&'static str> {
    error.filter(|e| e.field == field).map(CredentialsError::message)
}

/// Run client-side validation, returning the credentials to send.
fn prepare(identifier: &str, password: &str) -> Result<Credentials, CredentialsError> {
    Credentials::new(identifier, password).validate()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<ClientConfig>();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let invalid = RwSignal::new(None::<CredentialsError>);
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match prepare(&identifier.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                invalid.set(Some(e));
                return;
            }
        };
        invalid.set(None);
        failure.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = crate::net::api::HttpAuthApi::new(config.clone());
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::state::auth::login(auth, &api, &credentials).await {
                    failure.set(Some(e.user_message()));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    let clear_on_input = move || {
        invalid.set(None);
        failure.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <span class="login-card__logo">"H"</span>
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to your HRMS account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="identifier">
                        "Email, Username, or Mobile Number"
                    </label>
                    <input
                        id="identifier"
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Enter your email, username, or mobile number"
                        disabled=move || busy.get()
                        prop:value=move || identifier.get()
                        on:input=move |ev| {
                            identifier.set(event_target_value(&ev));
                            clear_on_input();
                        }
                    />
                    {move || {
                        field_message(invalid.get().as_ref(), CredentialsField::Identifier)
                            .map(|msg| view! { <p class="login-error">{msg}</p> })
                    }}
                    <label class="login-label" for="password">"Password"</label>
                    <div class="login-password">
                        <input
                            id="password"
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            disabled=move || busy.get()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                clear_on_input();
                            }
                        />
                        <button
                            class="btn login-password__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || {
                        field_message(invalid.get().as_ref(), CredentialsField::Password)
                            .map(|msg| view! { <p class="login-error">{msg}</p> })
                    }}
                    <Show when=move || failure.get().is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || failure.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

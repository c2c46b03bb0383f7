//! Home page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireAuth`. A session restored with a token but no
//! user (the user entry can be cleared on its own) refetches the profile.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_auth;
use crate::net::types::User;
use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthState;

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.name.trim().is_empty() => format!("Welcome, {}", user.name),
        Some(user) => format!("Welcome, {}", user.email),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let auth = use_auth();
    let navigate = use_navigate();

    if auth.is_authenticated() && auth.current_user().is_none() {
        let auth = auth.clone();
        leptos::task::spawn_local(async move { auth.refresh_user().await });
    }

    let on_logout = move |_| {
        auth.logout();
        let auth = auth.clone();
        leptos::task::spawn_local(async move { auth.notify_server_logout().await });
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>{move || auth_state.with(|s| greeting(s.user.as_ref()))}</h1>
                <button class="home-logout" type="button" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <Show when=move || auth_state.with(|s| s.user.is_some())>
                <dl class="home-profile">
                    <dt>"Email"</dt>
                    <dd>{move || auth_state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}</dd>
                    <dt>"User ID"</dt>
                    <dd>{move || auth_state.with(|s| s.user.as_ref().map(|u| u.id.clone()).unwrap_or_default())}</dd>
                </dl>
            </Show>
        </div>
    }
}

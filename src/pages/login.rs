//! Login page: email + password sign-in, with an account creation mode.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_auth;
use crate::routes::HOME_PATH;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginMode {
    SignIn,
    Register,
}

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_register_input(name: &str, email: &str, password: &str) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let (email, password) = validate_login_input(email, password)?;
    Ok((name.to_owned(), email, password))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let auth = use_auth();
    let navigate = use_navigate();

    let mode = RwSignal::new(LoginMode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    // Leave as soon as a session exists, including one restored from storage.
    Effect::new(move || {
        if auth_state.with(AuthState::is_authenticated) {
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let busy = move || auth_state.with(AuthState::is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let auth = auth.clone();
        match mode.get_untracked() {
            LoginMode::SignIn => match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok((email_value, password_value)) => {
                    hint.set(None);
                    leptos::task::spawn_local(async move { auth.login(&email_value, &password_value).await });
                }
                Err(msg) => hint.set(Some(msg)),
            },
            LoginMode::Register => {
                match validate_register_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                    Ok((name_value, email_value, password_value)) => {
                        hint.set(None);
                        leptos::task::spawn_local(async move {
                            auth.register(&name_value, &email_value, &password_value).await;
                        });
                    }
                    Err(msg) => hint.set(Some(msg)),
                }
            }
        }
    };

    let toggle_mode = move |_| {
        hint.set(None);
        mode.update(|m| {
            *m = match m {
                LoginMode::SignIn => LoginMode::Register,
                LoginMode::Register => LoginMode::SignIn,
            };
        });
    };

    let message = move || hint.get().map(str::to_owned).or_else(|| auth_state.with(|s| s.error.clone()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        LoginMode::SignIn => "Sign in to continue",
                        LoginMode::Register => "Create an account",
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == LoginMode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || match (busy(), mode.get()) {
                            (true, _) => "Please wait...",
                            (false, LoginMode::SignIn) => "Sign In",
                            (false, LoginMode::Register) => "Create Account",
                        }}
                    </button>
                </form>
                <Show when=move || message().is_some()>
                    <p class="login-message">{move || message().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-link" type="button" on:click=toggle_mode>
                    {move || match mode.get() {
                        LoginMode::SignIn => "No account yet? Create one",
                        LoginMode::Register => "Already registered? Sign in",
                    }}
                </button>
            </div>
        </div>
    }
}

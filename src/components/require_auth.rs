//! Route guard wrapping protected page subtrees.
//!
//! Children are rendered only while a session token is held. Otherwise the
//! router is sent to the login page with history replaced, so the back button
//! never lands on the guarded page again.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = auth.with(guard_decision) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || auth.with(guard_decision) == GuardDecision::Render>
            {children()}
        </Show>
    }
}

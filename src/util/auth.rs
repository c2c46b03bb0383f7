//! Route-guard decision shared by the router table and `RequireAuth`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect
//! behavior. A login still in flight counts as unauthenticated until it
//! resolves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected subtree.
    Render,
    /// Replace history with this path; the subtree is never rendered.
    Redirect(&'static str),
}

pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.is_authenticated() { GuardDecision::Render } else { GuardDecision::Redirect(LOGIN_PATH) }
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and user-aware pages; written only through the
//! transitions below, which `AuthController` drives.
//!
//! INVARIANTS
//! ==========
//! - `Succeeded` implies both `user` and `access_token` are set.
//! - `Failed` implies `error` is set.
//! - Authentication is token presence alone; a token with no user is still
//!   authenticated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{AuthSession, User};
use crate::util::session_token;
use crate::util::storage::KeyValueStore;

/// Lifecycle of the most recent login attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub status: AuthStatus,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state for a fresh page load, restored from storage.
    pub fn hydrate(store: &dyn KeyValueStore) -> Self {
        Self {
            user: session_token::get_persisted_user(store),
            access_token: session_token::get_access_token(store),
            status: AuthStatus::Idle,
            error: None,
        }
    }

    /// An empty token counts as none, matching what `hydrate` reads back.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|token| !token.is_empty())
    }

    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Loading
    }

    /// Login pending: user and token stay as they were.
    pub fn begin_login(&mut self) {
        self.status = AuthStatus::Loading;
        self.error = None;
    }

    pub fn finish_login(&mut self, session: AuthSession) {
        self.status = AuthStatus::Succeeded;
        self.user = Some(session.user);
        self.access_token = Some(session.access_token);
        self.error = None;
    }

    pub fn fail_login(&mut self, message: String) {
        self.status = AuthStatus::Failed;
        self.error = Some(message);
    }

    /// Logout: every field cleared, status back to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Holder the controller reads and mutates auth state through.
///
/// The app uses an `RwSignal` so views re-render; tests use a plain
/// `Rc<RefCell<_>>`.
pub trait AuthCell: Clone + 'static {
    fn snapshot(&self) -> AuthState;
    fn update(&self, f: impl FnOnce(&mut AuthState));
}

impl AuthCell for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        Update::update(self, f);
    }
}

impl AuthCell for Rc<RefCell<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }
}

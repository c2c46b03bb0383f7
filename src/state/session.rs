//! The auth state container: login, logout and user override.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthController` is built at startup and handed to pages through
//! Leptos context. It is the only writer of `AuthState` and of the two
//! persisted session entries.
//!
//! DESIGN
//! ======
//! Attempts never return errors; success and failure both end up in state.
//! Concurrent attempts are not de-duplicated, so the last one to resolve
//! decides the final state. Every attempt captures `generation` when it
//! starts, and `logout` bumps it: a completion from before a logout is
//! dropped instead of reviving the session. A user refresh is also dropped
//! when the token changed while it was in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;
use std::rc::Rc;

use super::auth::{AuthCell, AuthState};
use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthSession, Credentials, Registration, User};
use crate::util::session_token;
use crate::util::storage::KeyValueStore;

pub const DEFAULT_LOGIN_ERROR: &str = "Login failed";

/// Message shown for a failed attempt.
pub fn login_error_message(err: &ApiError) -> String {
    err.message().unwrap_or(DEFAULT_LOGIN_ERROR).to_owned()
}

pub struct AuthController<C: AuthCell> {
    cell: C,
    store: Rc<dyn KeyValueStore>,
    api: Rc<dyn AuthApi>,
    generation: Rc<Cell<u64>>,
}

impl<C: AuthCell> Clone for AuthController<C> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            store: Rc::clone(&self.store),
            api: Rc::clone(&self.api),
            generation: Rc::clone(&self.generation),
        }
    }
}

impl<C: AuthCell> AuthController<C> {
    /// Wrap `cell`, which should already hold `AuthState::hydrate(store)`.
    pub fn new(cell: C, store: Rc<dyn KeyValueStore>, api: Rc<dyn AuthApi>) -> Self {
        Self { cell, store, api, generation: Rc::new(Cell::new(0)) }
    }

    #[cfg(test)]
    pub(crate) fn cell(&self) -> &C {
        &self.cell
    }

    pub fn state(&self) -> AuthState {
        self.cell.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.snapshot().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.cell.snapshot().user
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) {
        log::info!("auth: login attempt for {email}");
        let credentials = Credentials::new(email, password);
        let generation = self.begin();
        let result = self.api.login(&credentials).await;
        self.complete(generation, result);
    }

    /// Create an account and sign in as it.
    pub async fn register(&self, name: &str, email: &str, password: &str) {
        log::info!("auth: registration attempt for {email}");
        let registration = Registration { name: name.to_owned(), credentials: Credentials::new(email, password) };
        let generation = self.begin();
        let result = self.api.register(&registration).await;
        self.complete(generation, result);
    }

    /// Clear the session locally. Always succeeds and invalidates any
    /// attempt still in flight.
    pub fn logout(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.cell.update(AuthState::reset);
        session_token::remove_access_token(self.store.as_ref());
        session_token::remove_persisted_user(self.store.as_ref());
        log::info!("auth: logged out");
    }

    /// Tell the server the session ended. Best effort; failures are logged.
    pub async fn notify_server_logout(&self) {
        if let Err(e) = self.api.logout().await {
            log::warn!("auth: server logout failed: {e}");
        }
    }

    /// Replace the user without going through login. `None` removes only the
    /// persisted user; the token entry is left as it is.
    pub fn set_user(&self, user: Option<User>) {
        match &user {
            Some(user) => session_token::set_persisted_user(self.store.as_ref(), user),
            None => session_token::remove_persisted_user(self.store.as_ref()),
        }
        self.cell.update(|state| state.user = user);
    }

    /// Re-fetch the signed-in user from the server.
    pub async fn refresh_user(&self) {
        let token = self.cell.snapshot().access_token;
        if !self.is_authenticated() {
            return;
        }
        let generation = self.generation.get();
        match self.api.current_user().await {
            Ok(user) if self.generation.get() == generation && self.cell.snapshot().access_token == token => {
                self.set_user(Some(user));
            }
            Ok(_) => log::debug!("auth: dropping user refresh for a session that has since changed"),
            Err(e) => log::warn!("auth: user refresh failed: {e}"),
        }
    }

    fn begin(&self) -> u64 {
        self.cell.update(AuthState::begin_login);
        self.generation.get()
    }

    fn complete(&self, generation: u64, result: Result<AuthSession, ApiError>) {
        if self.generation.get() != generation {
            log::debug!("auth: dropping login result that finished after logout");
            return;
        }
        let result = result.and_then(|session| {
            if session.access_token.trim().is_empty() {
                Err(ApiError::Decode("empty access token".to_owned()))
            } else {
                Ok(session)
            }
        });
        match result {
            Ok(session) => {
                log::info!("auth: signed in as {}", session.user.email);
                session_token::set_access_token(self.store.as_ref(), &session.access_token);
                session_token::set_persisted_user(self.store.as_ref(), &session.user);
                self.cell.update(|state| state.finish_login(session));
            }
            Err(e) => {
                let message = login_error_message(&e);
                log::warn!("auth: login failed: {e}");
                self.cell.update(|state| state.fail_login(message));
            }
        }
    }
}

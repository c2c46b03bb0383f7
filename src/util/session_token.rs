//! Named accessors for the two reserved session entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client reads the token on every request; the auth controller
//! writes both entries on login and clears them on logout. The two keys are
//! independent: nothing couples their writes.

#[cfg(test)]
#[path = "session_token_test.rs"]
mod session_token_test;

use serde_json::Value;

use super::storage::{self, KeyValueStore};
use crate::net::types::User;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

/// Read the bearer token. A JSON string is unwrapped, undecodable text is
/// used as-is, and any other JSON shape counts as no token.
pub fn get_access_token(store: &dyn KeyValueStore) -> Option<String> {
    match storage::get(store, ACCESS_TOKEN_KEY)? {
        Value::String(token) if !token.is_empty() => Some(token),
        _ => None,
    }
}

pub fn set_access_token(store: &dyn KeyValueStore, token: &str) {
    storage::set(store, ACCESS_TOKEN_KEY, token);
}

pub fn remove_access_token(store: &dyn KeyValueStore) {
    storage::remove(store, ACCESS_TOKEN_KEY);
}

/// Read the persisted user. Accepts a plain JSON object as well as a JSON
/// string wrapping one (older builds double-encoded the entry).
pub fn get_persisted_user(store: &dyn KeyValueStore) -> Option<User> {
    let value = match storage::get(store, USER_KEY)? {
        Value::String(inner) => serde_json::from_str::<Value>(&inner).ok()?,
        other => other,
    };
    match serde_json::from_value(value) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("storage: persisted user is malformed, ignoring: {e}");
            None
        }
    }
}

pub fn set_persisted_user(store: &dyn KeyValueStore, user: &User) {
    storage::set(store, USER_KEY, user);
}

pub fn remove_persisted_user(store: &dyn KeyValueStore) {
    storage::remove(store, USER_KEY);
}

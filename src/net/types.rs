//! Wire DTOs for the auth endpoints and the persisted user entry.
//!
//! DESIGN
//! ======
//! `User` is the union of the field sets the backend has been seen to return;
//! `avatar` is optional and skipped on output when absent so a persisted user
//! reads back field-for-field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by login, register and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

// Hand-written so passwords never reach the log.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

/// Successful response body of `POST /auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// A signed-in identity: who the user is and the bearer token for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub user: User,
    pub access_token: String,
}

impl From<AuthResponse> for AuthSession {
    fn from(resp: AuthResponse) -> Self {
        Self { user: resp.user, access_token: resp.token }
    }
}

/// JSON error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

//! Auth endpoints of the backend, plus an in-browser stand-in.
//!
//! `HttpAuthApi` talks to the real REST API through `HttpClient`.
//! `MockAuthApi` answers locally after a short delay and accepts a single
//! fixed account; it is the default until the backend exists.
//!
//! ERROR HANDLING
//! ==============
//! Both return `ApiError`; callers decide how failures show up in state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{AuthResponse, AuthSession, Credentials, Registration, User};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const CURRENT_USER_ENDPOINT: &str = "/auth/me";

/// Authentication boundary consumed by `AuthController`.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError>;
    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
}

pub struct HttpAuthApi {
    http: HttpClient,
}

impl HttpAuthApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let resp: AuthResponse = self.http.post(LOGIN_ENDPOINT, credentials).await?;
        Ok(resp.into())
    }

    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        let resp: AuthResponse = self.http.post(REGISTER_ENDPOINT, registration).await?;
        Ok(resp.into())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.http.post_empty(LOGOUT_ENDPOINT).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.http.get(CURRENT_USER_ENDPOINT).await
    }
}

pub const MOCK_EMAIL: &str = "test@example.com";
pub const MOCK_PASSWORD: &str = "123456";
pub const MOCK_TOKEN: &str = "fake-jwt-token-123";

fn mock_user() -> User {
    User { id: "1".to_owned(), email: MOCK_EMAIL.to_owned(), name: "Test User".to_owned(), avatar: None }
}

/// Local fake of the auth boundary. Stateless: it has no notion of who is
/// signed in beyond the fixed account.
#[derive(Clone, Debug)]
pub struct MockAuthApi {
    latency_ms: u32,
}

impl MockAuthApi {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }

    async fn delay(&self) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.latency_ms;
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        self.delay().await;
        if credentials.email == MOCK_EMAIL && credentials.password == MOCK_PASSWORD {
            Ok(AuthSession { user: mock_user(), access_token: MOCK_TOKEN.to_owned() })
        } else {
            Err(ApiError::Rejected("Invalid email or password".to_owned()))
        }
    }

    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        self.delay().await;
        if registration.credentials.email == MOCK_EMAIL {
            return Err(ApiError::Rejected("Email is already registered".to_owned()));
        }
        let user = User {
            id: "2".to_owned(),
            email: registration.credentials.email.clone(),
            name: registration.name.clone(),
            avatar: None,
        };
        Ok(AuthSession { user, access_token: MOCK_TOKEN.to_owned() })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.delay().await;
        Ok(mock_user())
    }
}

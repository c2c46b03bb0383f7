//! Shared JSON-over-HTTP client for the backend API.
//!
//! Client-side (csr): real requests via `gloo-net`, raced against a timeout.
//! Elsewhere: every send fails with `ApiError::Unavailable`.
//!
//! INTERCEPTION
//! ============
//! Outgoing: the stored bearer token, when present, is attached to every
//! request; without one the request goes out unauthenticated.
//! Incoming: any 401 removes the stored token and hard-redirects to the login
//! page, whichever request triggered it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ErrorBody;
use crate::config::AppConfig;
use crate::routes::LOGIN_PATH;
use crate::util::navigation::Navigator;
use crate::util::session_token;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A request after outgoing interception, ready for the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Option<String>,
    pub body: Option<String>,
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join `base` and `path` with exactly one slash between them.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: Rc<str>,
    timeout_ms: u32,
    store: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
}

impl HttpClient {
    pub fn new(config: &AppConfig, store: Rc<dyn KeyValueStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            base_url: Rc::from(config.api_base_url.as_str()),
            timeout_ms: config.request_timeout_ms,
            store,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Outgoing interception: resolve the URL and attach the bearer token.
    pub fn prepare(&self, method: Method, path: &str, body: Option<String>) -> PreparedRequest {
        PreparedRequest {
            method,
            url: endpoint_url(&self.base_url, path),
            authorization: session_token::get_access_token(self.store.as_ref()).map(|t| bearer_header(&t)),
            body,
        }
    }

    /// Incoming interception: pass 2xx through, handle 401, map the rest.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for 401 (after clearing the token and redirecting),
    /// `Status` for any other non-2xx code.
    pub fn intercept_response(&self, status: u16, body: &str) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        if status == 401 {
            log::warn!("http: 401 from server, clearing session token and redirecting to {LOGIN_PATH}");
            session_token::remove_access_token(self.store.as_ref());
            self.navigator.hard_redirect(LOGIN_PATH);
            return Err(ApiError::Unauthorized);
        }
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
        Err(ApiError::Status { status, message })
    }

    /// `GET path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failures as [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(self.prepare(Method::Get, path, None)).await?;
        decode(&text)
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failures as [`ApiError`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = self.execute(self.prepare(Method::Post, path, Some(encoded))).await?;
        decode(&text)
    }

    /// `POST path` without a body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Transport or status failures as [`ApiError`].
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.prepare(Method::Post, path, None)).await.map(|_| ())
    }

    async fn execute(&self, request: PreparedRequest) -> Result<String, ApiError> {
        log::debug!("http: {} {}", request.method, request.url);
        let (status, text) = self.transport(&request).await?;
        self.intercept_response(status, &text)?;
        Ok(text)
    }

    async fn transport(&self, request: &PreparedRequest) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::RequestBuilder;

            let method = match request.method {
                Method::Get => gloo_net::http::Method::GET,
                Method::Post => gloo_net::http::Method::POST,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method).header("Accept", "application/json");
            if let Some(auth) = &request.authorization {
                builder = builder.header("Authorization", auth);
            }
            let built = match &request.body {
                Some(body) => builder.header("Content-Type", "application/json").body(body.clone()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let send = Box::pin(async move {
                let resp = built.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
                let status = resp.status();
                let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok::<_, ApiError>((status, text))
            });
            let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
            match select(send, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ApiError::Timeout(self.timeout_ms)),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, self.timeout_ms);
            Err(ApiError::Unavailable)
        }
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

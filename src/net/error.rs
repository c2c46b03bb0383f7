//! Failure taxonomy for calls across the HTTP/auth boundary.

/// Error returned by `HttpClient` and `AuthApi` implementations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The auth boundary refused the supplied credentials.
    #[error("{0}")]
    Rejected(String),
    /// The server answered 401; the stored token has already been cleared.
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx response.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// No HTTP transport in this build (non-browser).
    #[error("http transport not available")]
    Unavailable,
}

impl ApiError {
    /// Human-readable message carried by the failure, if it has one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            Self::Rejected(message) => Some(message.as_str()),
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(message) => Some(message.as_str()),
            Self::Unauthorized | Self::Timeout(_) | Self::Decode(_) | Self::Unavailable => None,
        };
        message.filter(|m| !m.trim().is_empty())
    }
}

//! Client-side error model.
//!
//! One taxonomy for everything that can go wrong between the UI and the
//! backend. Variants map one-to-one onto the recovery paths: `SessionExpired`
//! tears the session down, `Validation` never reaches the network, and the
//! rest surface as a transient banner message while caches stay untouched.

use thiserror::Error;

/// Result type used across the client.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered 401 on an authenticated call. Fatal to the
    /// session; recoverable only by logging in again.
    #[error("session expired")]
    SessionExpired,

    /// A required form field was missing. No request was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The server answered 403 (e.g. the user directory without Admin).
    #[error("not allowed")]
    Forbidden,

    /// Any other non-2xx response.
    #[error("server returned {status}")]
    Api { status: u16, body: String },

    /// The request never completed (DNS, refused connection, dropped socket).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the shape we expected.
    #[error("parse error: {0}")]
    Parse(String),

    /// The durable session vault could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this failure must end the session (spec: any 401 on an
    /// authenticated call forces logout).
    pub fn is_session_fatal(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

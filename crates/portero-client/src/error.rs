//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Result alias used across the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by [`ApiClient`](crate::ApiClient) calls.
///
/// Transport failures (no response came back at all) and API rejections
/// (any non-2xx response) are kept apart so callers can react to each
/// without matching on message strings. The client never retries and never
/// substitutes fallback values; every failure reaches the caller as one of
/// these variants.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the server's `error` field when the
    /// body carries the standard envelope, otherwise the raw body text.
    #[error("API error (status {status}) on {path}: {message}")]
    Api {
        status: u16,
        message: String,
        path: String,
    },

    /// 2xx response whose body does not match the expected shape.
    #[error("Invalid response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// HTTP status of the rejection, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the credential with 401.
    ///
    /// Callers that keep a session alive special-case this to trigger
    /// re-authentication instead of reporting a plain API failure.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True when the server answered 404 for the addressed record.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ClientError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            ClientError::Network("Request timed out".to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

/// Error envelope the API attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

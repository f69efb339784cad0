//! Credential injection
//!
//! The client never owns, stores, or refreshes credentials. Whatever
//! session state an application keeps lives behind [`CredentialProvider`];
//! the client reads the current token once per request and reports back
//! through [`CredentialProvider::on_unauthorized`] when the server stops
//! accepting it. Refresh, persistence, and login flows belong to the
//! application, not to this crate.

use std::fmt;

/// Source of the bearer credential attached to outgoing requests.
pub trait CredentialProvider: Send + Sync {
    /// Current bearer token, or `None` to send the request anonymously.
    fn token(&self) -> Option<String>;

    /// Invoked when the server rejects the credential with 401, before the
    /// error reaches the caller. Implementations typically drop a cached
    /// token here so the next call starts clean.
    fn on_unauthorized(&self) {}
}

/// Fixed token provider, for services and tests.
#[derive(Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

// Keep the token out of debug output.
impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("token", &"***")
            .finish()
    }
}

/// No credential at all. Only the auth endpoints accept such calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn token(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials_yield_token() {
        let creds = StaticCredentials::new("tok-123");
        assert_eq!(creds.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_static_credentials_debug_redacts_token() {
        let creds = StaticCredentials::new("super-secret");
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_anonymous_has_no_token() {
        assert!(Anonymous.token().is_none());
    }
}

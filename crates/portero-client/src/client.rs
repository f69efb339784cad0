//! HTTP request dispatcher (reqwest-based).
//!
//! Every call the resource handles make funnels through [`ApiClient`]:
//! one request per call, verb chosen by [`Operation::method`], bearer
//! credential read from the injected [`CredentialProvider`], and every
//! outcome normalized into [`ClientError`] before it reaches the caller.

use crate::credentials::CredentialProvider;
use crate::error::{ApiErrorBody, ClientError, ClientResult};
use crate::operation::Operation;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the Centro de Control de Acceso REST API.
///
/// The base URL carries the server's path prefix (for example
/// `https://host/api`); resource paths are appended to it as-is. The
/// client holds no session state of its own and is cheap to clone; clones
/// share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL including the API prefix, without a trailing slash.
    base_url: String,
    /// Source of the bearer credential, injected by the application.
    credentials: Arc<dyn CredentialProvider>,
    /// Underlying HTTP client.
    http_client: Client,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portero-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ClientError::InvalidConfig(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self::with_http_client(base_url, credentials, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
        http_client: Client,
    ) -> Self {
        // Normalize base URL: strip trailing slash.
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            credentials,
            http_client,
        }
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Dispatch ──────────────────────────────────────────────────────

    /// Build and send one request, returning the deserialized body.
    ///
    /// `path` is relative to the base URL, without a leading slash.
    pub(crate) async fn dispatch<T, B>(
        &self,
        op: Operation,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(op, path, query, body).await?;
        self.handle_response(response, path).await
    }

    /// Same as [`dispatch`](Self::dispatch) for endpoints that answer with
    /// an empty body.
    pub(crate) async fn dispatch_unit<B>(
        &self,
        op: Operation,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(op, path, query, body).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            self.handle_error_response(response, path).await
        }
    }

    async fn send<B>(
        &self,
        op: Operation,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ClientResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", op.method(), url);

        let mut builder = self.http_client.request(op.method(), &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(token) = self.credentials.token() {
            builder = builder.bearer_auth(token);
        }

        Ok(builder.send().await?)
    }

    // ── Convenience wrappers ──────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.dispatch::<T, ()>(Operation::Read, path, &[], None)
            .await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.dispatch::<T, ()>(Operation::Read, path, query, None)
            .await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.dispatch(Operation::Create, path, &[], Some(body)).await
    }

    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<()> {
        self.dispatch_unit(Operation::Create, path, &[], body).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.dispatch(Operation::Update, path, &[], Some(body)).await
    }

    pub(crate) async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.dispatch_unit(Operation::Update, path, &[], Some(body))
            .await
    }

    pub(crate) async fn put_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.dispatch::<T, ()>(Operation::Update, path, query, None)
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        self.dispatch_unit::<()>(Operation::Delete, path, &[], None)
            .await
    }

    // ── Response Handling ─────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        path: &str,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| ClientError::Decode {
                path: format!("/{path}"),
                message: e.to_string(),
            })
        } else {
            self.handle_error_response(response, path).await
        }
    }

    async fn handle_error_response<T>(
        &self,
        response: reqwest::Response,
        path: &str,
    ) -> ClientResult<T> {
        let status = response.status();

        let body = response.text().await.unwrap_or_default();

        // The API wraps failures in a standard envelope; fall back to the
        // raw body when the envelope is absent (proxies, gateways).
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(envelope) if !envelope.error.is_empty() => envelope.error,
            _ if body.is_empty() => format!("HTTP {status}"),
            _ => body,
        };

        warn!("request to /{} failed: {} {}", path, status.as_u16(), message);

        if status == StatusCode::UNAUTHORIZED {
            // Let the credential source drop whatever it cached before the
            // error reaches the caller.
            self.credentials.on_unauthorized();
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
            path: format!("/{path}"),
        })
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

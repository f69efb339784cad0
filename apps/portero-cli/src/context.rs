//! Builds API clients from the stored configuration and session

use crate::config::{Config, ConfigPaths};
use crate::error::CliResult;
use crate::session::{Session, SessionCredentials};
use portero_client::{Anonymous, ApiClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Client wired to the stored session. Fails when nobody is logged in.
pub fn authenticated_client() -> CliResult<ApiClient> {
    let paths = ConfigPaths::new()?;
    let config = Config::load(&paths)?;
    let session = Session::require(&paths)?;
    debug!(api_url = %config.api_url, usuario = %session.email, "using stored session");

    let credentials = Arc::new(SessionCredentials::new(&session, paths));
    let client = ApiClient::new(
        config.api_url.as_str(),
        credentials,
        Duration::from_secs(config.timeout_secs),
    )?;
    Ok(client)
}

/// Client with no credential attached. Only the auth endpoints accept
/// such calls.
pub fn anonymous_client() -> CliResult<ApiClient> {
    let paths = ConfigPaths::new()?;
    let config = Config::load(&paths)?;
    debug!(api_url = %config.api_url, "anonymous client");

    let client = ApiClient::new(
        config.api_url.as_str(),
        Arc::new(Anonymous),
        Duration::from_secs(config.timeout_secs),
    )?;
    Ok(client)
}

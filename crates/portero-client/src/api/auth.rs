//! Auth endpoints
//!
//! The client forwards credentials to the remote auth service and hands
//! the result back; it keeps no session of its own. Where the issued
//! token ends up is the application's business, fed back in through
//! [`CredentialProvider`](crate::CredentialProvider).

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{LoginRequest, LoginResponse, PasswordChangeRequest};

/// Typed access to `/auth`.
pub struct AuthApi<'c> {
    client: &'c ApiClient,
}

impl ApiClient {
    /// Handle for the auth endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Exchange credentials for a token and the account's profile
    /// (POST /auth/login). Works without a bearer credential; with one
    /// attached the server simply ignores it.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.client.post("auth/login", request).await
    }

    /// Change the password of the account the bearer credential belongs
    /// to (PUT /auth/change-password). Empty response on success.
    pub async fn change_password(&self, request: &PasswordChangeRequest) -> ClientResult<()> {
        self.client.put_unit("auth/change-password", request).await
    }

    /// Close the session behind the bearer credential
    /// (POST /auth/logout). Empty response on success.
    pub async fn logout(&self) -> ClientResult<()> {
        self.client.post_unit::<()>("auth/logout", None).await
    }
}

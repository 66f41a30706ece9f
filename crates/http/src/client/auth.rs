//! Authentication endpoints and session teardown

use super::{ApiClient, error::ClientError};
use crate::navigator::RedirectTarget;
use crate::types::{ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest};
use optimach_core::{Session, UserSnapshot};
use reqwest::{Method, header};
use serde_json::Value;
use tracing::{debug, info};

impl ApiClient {
    /// Log in and persist the resulting session. All three parts
    /// (access token, refresh token, user snapshot) land in the store
    /// in one write; no reader ever sees a partial session.
    ///
    /// Login failures propagate so the login page can show them; they
    /// are the one place auth errors are user-visible.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserSnapshot, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .execute(Method::POST, "/auth/login", |r| r.json(&body))
            .await?;

        // In-band rejection first: the backend reports credential
        // failures inside an HTTP 200, without tokens.
        if response.status != 200 {
            return Err(ClientError::AuthenticationFailed(response.message));
        }
        let (Some(access), Some(refresh), Some(credential)) = (
            response.access_token,
            response.refresh_token,
            response.credential,
        ) else {
            return Err(ClientError::AuthenticationFailed(
                "login response is missing tokens".into(),
            ));
        };

        let session = Session::new(access, refresh, credential);
        self.inner.store.set(&session);
        info!(user = %session.user.username, "login succeeded");
        Ok(session.user)
    }

    /// Create a new account. Does not log in.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let _: Value = self
            .execute(Method::POST, "/auth/register", |r| r.json(&body))
            .await?;
        Ok(())
    }

    /// Replace the password for an account (forgot-password flow).
    pub async fn change_password(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let body = ChangePasswordRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let _: Value = self
            .execute(Method::PUT, "/auth/change-password", |r| r.json(&body))
            .await?;
        Ok(())
    }

    /// User-initiated logout. Same teardown as an unrecoverable auth
    /// failure.
    pub async fn logout(&self) {
        self.force_logout().await;
    }

    /// The logout collaborator: best-effort server-side invalidation,
    /// then local teardown and a redirect to the login entry point.
    /// Client-side teardown proceeds whatever the server says.
    pub(crate) async fn force_logout(&self) {
        let mut request = self.inner.http.post(self.url("/auth/logout"));
        if let Some(session) = self.inner.store.get() {
            request = request.header(
                header::AUTHORIZATION,
                format!("Bearer {}", session.access_token),
            );
        }
        if let Err(err) = request.send().await {
            debug!(error = %err, "logout endpoint unreachable, clearing session anyway");
        }

        self.inner.store.clear();
        self.inner.navigator.redirect(RedirectTarget::Login);
    }
}

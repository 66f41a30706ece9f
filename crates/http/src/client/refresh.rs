//! Single-flight access-token refresh

use super::{ApiClient, error::ClientError};
use crate::types::{RefreshRequest, RefreshResponse};
use tracing::{debug, warn};

impl ApiClient {
    /// Refresh the stored access token if a session exists. This is
    /// the one refresh code path; the session guard delegates here
    /// instead of issuing its own refresh POST.
    ///
    /// # Errors
    ///
    /// Fails when no session is stored or the refresh endpoint
    /// rejects, times out, or is unreachable. Any refresh failure has
    /// already torn the session down by the time this returns.
    pub async fn refresh_session(&self) -> Result<String, ClientError> {
        let Some(session) = self.inner.store.get() else {
            return Err(ClientError::AuthenticationFailed(
                "no session to refresh".into(),
            ));
        };
        self.refresh_access_token(&session.access_token).await
    }

    /// Exchange the refresh token for a new access token, sharing one
    /// in-flight refresh across concurrent callers.
    ///
    /// Callers arrive with the access token their failed request
    /// used. The first one through the lock performs the refresh
    /// POST; the rest observe the already-replaced token once they
    /// acquire the lock and reuse it without a second network call.
    pub(super) async fn refresh_access_token(&self, stale: &str) -> Result<String, ClientError> {
        let _flight = self.inner.refresh_lock.lock().await;

        let Some(session) = self.inner.store.get() else {
            // The refresh ahead of us failed and tore the session
            // down; teardown and redirect happened exactly once there.
            return Err(ClientError::AuthenticationFailed(
                "session invalidated while awaiting refresh".into(),
            ));
        };
        if session.access_token != stale {
            debug!("reusing access token refreshed by a concurrent request");
            return Ok(session.access_token);
        }

        match self.post_refresh(&session.refresh_token).await {
            Ok(access_token) => {
                self.inner.store.set_access_token(&access_token);
                debug!("access token refreshed");
                Ok(access_token)
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, tearing down session");
                self.force_logout().await;
                Err(err)
            }
        }
    }

    /// The bare refresh POST: no bearer header, no 401 recovery, and
    /// its own deadline since a hung refresh blocks every queued
    /// request.
    async fn post_refresh(&self, refresh_token: &str) -> Result<String, ClientError> {
        let request = self
            .inner
            .http
            .post(self.url("/auth/refresh"))
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            });

        let response = tokio::time::timeout(self.inner.refresh_timeout, request.send())
            .await
            .map_err(|_| ClientError::RefreshTimeout)??;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }

        let body: RefreshResponse = response.json().await?;
        Ok(body.access_token)
    }
}

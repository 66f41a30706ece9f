//! Optimach API client
//!
//! Every request goes out with the stored access token attached (when
//! one exists) and comes back through the 401 recovery path: one
//! silent refresh-and-retry per request, with refreshes single-flight
//! across the whole client.

pub mod auth;
pub mod diary;
pub mod error;
pub mod fatsecret;
pub mod food;
pub mod foodlog;
pub mod refresh;
pub mod user;

use crate::navigator::Navigator;
use crate::types::ApiResponse;
use error::ClientError;
use optimach_core::{Session, TokenStore};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(10);

/// Optimach API client. Cheap to clone; all clones share the token
/// store and the single-flight refresh lock.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    refresh_timeout: Duration,
    // The single-flight coordinator. The first caller to take the
    // lock performs the refresh POST; everyone queued behind it
    // re-reads the store and reuses that outcome.
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The stored session, if one exists.
    pub fn session(&self) -> Option<Session> {
        self.inner.store.get()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    fn dispatch<F>(&self, method: Method, path: &str, customize: &F, token: Option<&str>) -> RequestBuilder
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let mut request = self.inner.http.request(method, self.url(path));
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        customize(request)
    }

    /// Send a request with the current access token attached, running
    /// the 401 recovery path at most once.
    ///
    /// A missing token is not an error here; the request goes out
    /// unauthenticated and the server decides.
    async fn send_with_auth<F>(
        &self,
        method: Method,
        path: &str,
        customize: F,
    ) -> Result<Response, ClientError>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let token = self.inner.store.get().map(|s| s.access_token);
        let response = self
            .dispatch(method.clone(), path, &customize, token.as_deref())
            .send()
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let Some(stale) = token else {
            // 401 with nothing to refresh: unrecoverable. Tear down
            // and let the original response speak for itself.
            warn!(path, "unauthorized with no stored session");
            self.force_logout().await;
            return Ok(response);
        };

        debug!(path, "unauthorized response, refreshing access token");
        let fresh = self.refresh_access_token(&stale).await?;

        // One retry only; a second 401 passes through as a final
        // failure rather than looping back into refresh.
        let retried = self
            .dispatch(method, path, &customize, Some(fresh.as_str()))
            .send()
            .await?;
        Ok(retried)
    }

    /// Execute and deserialize a typed response, propagating HTTP
    /// error statuses as [`ClientError`].
    async fn execute<T, F>(&self, method: Method, path: &str, customize: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let response = self.send_with_auth(method, path, customize).await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a CRUD endpoint and normalize the outcome into the
    /// `{status, message, data}` envelope pages consume. A request
    /// that never reached the server normalizes to status 500.
    async fn execute_api<T, F>(&self, method: Method, path: &str, customize: F) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        match self.send_with_auth(method, path, customize).await {
            Ok(response) => Self::normalize(response).await,
            Err(err) => {
                warn!(path, error = %err, "request did not reach the server");
                ApiResponse::network_error(err.to_string())
            }
        }
    }

    /// Fold any server response into the envelope: error bodies that
    /// already carry `{status, message, data}` pass through verbatim,
    /// anything else is synthesized from the HTTP status.
    async fn normalize<T: DeserializeOwned>(response: Response) -> ApiResponse<T> {
        let status = response.status();
        match response.json::<ApiResponse<T>>().await {
            Ok(body) => body,
            Err(err) if status.is_success() => {
                ApiResponse::network_error(format!("invalid response body: {err}"))
            }
            Err(_) => ApiResponse {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
                data: None,
            },
        }
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    refresh_timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Deadline for the refresh call specifically (default 10s)
    pub fn refresh_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Token store shared with the session guard
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Navigation capability for forced redirects
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let store = self
            .store
            .ok_or_else(|| ClientError::Configuration("token_store is required".into()))?;
        let navigator = self
            .navigator
            .ok_or_else(|| ClientError::Configuration("navigator is required".into()))?;

        let mut client_builder = ClientBuilder::new();
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| "optimach-client/0.1.0".to_string()),
        );
        let http = client_builder.build()?;

        Ok(ApiClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                store,
                navigator,
                refresh_timeout: self.refresh_timeout.unwrap_or(DEFAULT_REFRESH_TIMEOUT),
                refresh_lock: Mutex::new(()),
            }),
        })
    }
}

//! Session guard
//!
//! Gates rendering of protected views: on every navigation it checks
//! the stored session, refreshing the access token through the
//! client's single refresh code path when the embedded expiry claim
//! has passed.

use crate::client::ApiClient;
use crate::navigator::{Navigator, RedirectTarget};
use optimach_core::token;
use std::sync::Arc;
use tracing::debug;

/// Where the guard stands for the current navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session check in progress; protected content is suppressed.
    Checking,
    /// Session confirmed valid for this navigation.
    Authorized,
    /// No valid session; navigation to the target has been forced.
    Redirecting(RedirectTarget),
}

/// Per-navigation auth check for protected views.
pub struct SessionGuard {
    client: ApiClient,
    navigator: Arc<dyn Navigator>,
    state: GuardState,
    current_path: Option<String>,
}

impl SessionGuard {
    pub fn new(client: ApiClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            client,
            navigator,
            state: GuardState::Checking,
            current_path: None,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Run the auth check for a navigation. Re-enters `Checking` only
    /// when the path actually changes; repeated calls for the same
    /// path return the settled state untouched.
    pub async fn navigate(&mut self, path: &str) -> GuardState {
        if self.current_path.as_deref() == Some(path) && self.state != GuardState::Checking {
            return self.state;
        }
        self.current_path = Some(path.to_string());
        self.state = GuardState::Checking;
        self.state = self.check().await;
        self.state
    }

    async fn check(&self) -> GuardState {
        let Some(session) = self.client.session() else {
            // Nothing stored: redirect without touching the network.
            debug!("no stored session, redirecting to login");
            self.navigator.redirect(RedirectTarget::Login);
            return GuardState::Redirecting(RedirectTarget::Login);
        };

        if token::is_expired_now(&session.access_token) {
            debug!("access token expired, refreshing");
            if self.client.refresh_session().await.is_err() {
                // Teardown and the login redirect already happened
                // inside the client's refresh failure path.
                return GuardState::Redirecting(RedirectTarget::Login);
            }
        }

        if !session.user.has_completed_profile {
            debug!(user = %session.user.username, "profile form not filled, redirecting");
            self.navigator.redirect(RedirectTarget::ProfileForm);
            return GuardState::Redirecting(RedirectTarget::ProfileForm);
        }

        GuardState::Authorized
    }
}

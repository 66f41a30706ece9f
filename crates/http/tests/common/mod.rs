//! Shared test fixtures
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use optimach_core::{MemoryTokenStore, Session, TokenStore, UserSnapshot};
use optimach_http::{ApiClient, Navigator, RedirectTarget};
use std::sync::{Arc, Mutex};

/// Navigator double that records every forced redirect.
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<RedirectTarget>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn redirects(&self) -> Vec<RedirectTarget> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, target: RedirectTarget) {
        self.redirects.lock().unwrap().push(target);
    }
}

/// Unsigned JWT with the given `exp` claim; nothing verifies the
/// signature segment.
pub fn fake_jwt(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"7","exp":{exp}}}"#));
    format!("{header}.{payload}.sig")
}

/// A JWT expiring one hour from now.
pub fn fresh_jwt() -> String {
    fake_jwt(chrono::Utc::now().timestamp() + 3600)
}

/// A JWT that expired an hour ago.
pub fn expired_jwt() -> String {
    fake_jwt(chrono::Utc::now().timestamp() - 3600)
}

pub fn alice(has_completed_profile: bool) -> UserSnapshot {
    UserSnapshot {
        id_user: 7,
        username: "alice".into(),
        has_completed_profile,
        is_admin: false,
        is_active: true,
    }
}

pub fn seeded_store(access_token: &str) -> Arc<MemoryTokenStore> {
    let store = Arc::new(MemoryTokenStore::new());
    store.set(&Session::new(access_token, "R1", alice(true)));
    store
}

pub fn build_client(
    base_url: &str,
    store: Arc<MemoryTokenStore>,
    navigator: Arc<RecordingNavigator>,
) -> ApiClient {
    ApiClient::builder()
        .base_url(base_url)
        .token_store(store)
        .navigator(navigator)
        .build()
        .unwrap()
}

//! Integration tests for the session guard

mod common;

use common::{
    RecordingNavigator, alice, build_client, expired_jwt, fresh_jwt, seeded_store,
};
use optimach_core::{MemoryTokenStore, Session, TokenStore};
use optimach_http::{GuardState, RedirectTarget, SessionGuard};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn absent_session_redirects_without_any_network_call() {
    let server = MockServer::start().await;

    let navigator = RecordingNavigator::new();
    let client = build_client(&server.uri(), Arc::new(MemoryTokenStore::new()), navigator.clone());
    let mut guard = SessionGuard::new(client, navigator.clone());

    assert_eq!(guard.state(), GuardState::Checking);
    let state = guard.navigate("/home").await;
    assert_eq!(state, GuardState::Redirecting(RedirectTarget::Login));
    assert_eq!(navigator.redirects(), vec![RedirectTarget::Login]);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn valid_token_authorizes_immediately() {
    let server = MockServer::start().await;

    let navigator = RecordingNavigator::new();
    let client = build_client(&server.uri(), seeded_store(&fresh_jwt()), navigator.clone());
    let mut guard = SessionGuard::new(client, navigator.clone());

    let state = guard.navigate("/home").await;
    assert_eq!(state, GuardState::Authorized);
    assert!(navigator.redirects().is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn expired_token_refreshes_silently() {
    let server = MockServer::start().await;
    let stale = expired_jwt();

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({ "refresh_token": "R1" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "fresh-token" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store(&stale);
    let navigator = RecordingNavigator::new();
    let client = build_client(&server.uri(), store.clone(), navigator.clone());
    let mut guard = SessionGuard::new(client.clone(), navigator.clone());

    let state = guard.navigate("/home").await;
    assert_eq!(state, GuardState::Authorized);
    assert_eq!(client.session().unwrap().access_token, "fresh-token");
    assert!(navigator.redirects().is_empty());
}

#[tokio::test]
async fn failed_refresh_redirects_to_login_exactly_once() {
    let server = MockServer::start().await;
    let stale = expired_jwt();

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_string("refresh token expired"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store(&stale);
    let navigator = RecordingNavigator::new();
    let client = build_client(&server.uri(), store.clone(), navigator.clone());
    let mut guard = SessionGuard::new(client.clone(), navigator.clone());

    let state = guard.navigate("/home").await;
    assert_eq!(state, GuardState::Redirecting(RedirectTarget::Login));
    assert_eq!(client.session(), None);
    // teardown happened in the client's refresh path, exactly once
    assert_eq!(navigator.redirects(), vec![RedirectTarget::Login]);
}

#[tokio::test]
async fn unfilled_profile_redirects_to_the_form() {
    let server = MockServer::start().await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set(&Session::new(fresh_jwt(), "R1", alice(false)));

    let navigator = RecordingNavigator::new();
    let client = build_client(&server.uri(), store, navigator.clone());
    let mut guard = SessionGuard::new(client, navigator.clone());

    let state = guard.navigate("/home").await;
    assert_eq!(state, GuardState::Redirecting(RedirectTarget::ProfileForm));
    assert_eq!(navigator.redirects(), vec![RedirectTarget::ProfileForm]);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn login_scenario_lands_on_the_profile_form() {
    let server = MockServer::start().await;
    let access = fresh_jwt();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "access_token": access,
            "refresh_token": "R1",
            "credential": {
                "id_user": 7,
                "username": "alice",
                "have_filled_form": 0,
                "is_admin": 0,
                "is_active": 1
            }
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let navigator = RecordingNavigator::new();
    let client = build_client(&server.uri(), store, navigator.clone());

    client.login("alice", "secret").await.unwrap();

    let mut guard = SessionGuard::new(client, navigator.clone());
    let state = guard.navigate("/home").await;
    assert_eq!(state, GuardState::Redirecting(RedirectTarget::ProfileForm));
}

#[tokio::test]
async fn recheck_happens_on_path_change_not_on_repeat_calls() {
    let server = MockServer::start().await;

    let navigator = RecordingNavigator::new();
    let client = build_client(&server.uri(), Arc::new(MemoryTokenStore::new()), navigator.clone());
    let mut guard = SessionGuard::new(client, navigator.clone());

    guard.navigate("/home").await;
    assert_eq!(navigator.redirects().len(), 1);

    // same path again: settled state is reused, no second check
    let state = guard.navigate("/home").await;
    assert_eq!(state, GuardState::Redirecting(RedirectTarget::Login));
    assert_eq!(navigator.redirects().len(), 1);

    // a real navigation re-enters the check
    guard.navigate("/profile").await;
    assert_eq!(navigator.redirects().len(), 2);
}

//! Registration form against a mock backend.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use citydesk::egui_app::registration::{NO_TOKEN_RECEIVED, REGISTRATION_FAILED};
use citydesk::egui_app::{
    AuthContext, DebugCategory, DebugLevel, RegistrationForm, RegistrationOutcome, Route, Router,
    SubmitOutcome,
};
use citydesk::shared::ApiError;
use common::{api_for, eventually, logger, settle, unreachable_uri};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::runtime::Handle;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn filled_form(server_uri: &str) -> RegistrationForm {
    let mut form = RegistrationForm::new(api_for(server_uri), Handle::current(), logger());
    form.username = "alice".to_string();
    form.password = "secret".to_string();
    form
}

/// Poll until the pending submission resolves.
async fn resolve(
    form: &mut RegistrationForm,
    auth: &mut AuthContext,
    router: &mut Router,
) -> Option<RegistrationOutcome> {
    let mut outcome = None;
    eventually(|| {
        outcome = form.poll(auth, router);
        outcome.is_some()
    })
    .await;
    outcome
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_success_stores_token_and_navigates_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .and(body_json(json!({"username": "alice", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123", "expiresIn": 3600000})))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = filled_form(&server.uri());
    let mut auth = AuthContext::new();
    let mut router = Router::default();

    assert_eq!(form.submit(), SubmitOutcome::Sent);
    assert!(form.is_in_flight());

    let outcome = resolve(&mut form, &mut auth, &mut router).await;
    assert_eq!(outcome, Some(RegistrationOutcome::Registered));
    assert_eq!(auth.token(), Some("abc123"));
    assert_eq!(auth.expires_in_ms(), Some(3_600_000));
    assert_eq!(router.navigations(), &[Route::CityActions]);
    assert!(!form.is_in_flight());
    assert!(form.error().is_none());

    // Nothing else is pending.
    settle(Duration::from_millis(50), || {
        assert!(form.poll(&mut auth, &mut router).is_none());
    })
    .await;
    assert_eq!(router.navigations().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_username_logged_only_at_debug() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .mount(&server)
        .await;

    let log = logger();
    let mut form = RegistrationForm::new(api_for(&server.uri()), Handle::current(), log.clone());
    form.username = "alice".to_string();
    form.password = "secret".to_string();
    let mut auth = AuthContext::new();
    let mut router = Router::default();

    form.submit();
    let outcome = resolve(&mut form, &mut auth, &mut router).await;
    assert_eq!(outcome, Some(RegistrationOutcome::Registered));

    let registered: Vec<_> = log
        .get_entries()
        .into_iter()
        .filter(|e| e.message == "Registered as alice")
        .collect();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].level, DebugLevel::Debug);
    assert!(log
        .get_entries()
        .iter()
        .filter(|e| e.level != DebugLevel::Debug && e.level != DebugLevel::Trace)
        .all(|e| !e.to_string().contains("alice")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_token_does_not_navigate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"expiresIn": 3600000})))
        .mount(&server)
        .await;

    let log = logger();
    let mut form = RegistrationForm::new(api_for(&server.uri()), Handle::current(), log.clone());
    form.username = "alice".to_string();
    form.password = "secret".to_string();
    let mut auth = AuthContext::new();
    let mut router = Router::default();

    form.submit();
    let outcome = resolve(&mut form, &mut auth, &mut router).await;

    assert_matches!(
        outcome,
        Some(RegistrationOutcome::MissingToken(ApiError::MissingField { field: "token" }))
    );
    assert!(!auth.is_authenticated());
    assert!(router.navigations().is_empty());
    assert_eq!(form.error(), Some(NO_TOKEN_RECEIVED));

    let errors = log.get_entries_by_level(DebugLevel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].category, DebugCategory::Auth);
    assert_eq!(errors[0].message, "No token received");
    assert_matches!(errors[0].context.as_deref(), Some(ctx) if ctx.contains("'token'"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_network_failure_does_not_navigate() {
    let mut form = filled_form(&unreachable_uri());
    let mut auth = AuthContext::new();
    let mut router = Router::default();

    assert_eq!(form.submit(), SubmitOutcome::Sent);
    let outcome = resolve(&mut form, &mut auth, &mut router).await;

    assert_matches!(outcome, Some(RegistrationOutcome::Failed(ApiError::Network { .. })));
    assert!(!auth.is_authenticated());
    assert!(router.navigations().is_empty());
    assert_eq!(form.error(), Some(REGISTRATION_FAILED));
    assert!(!form.is_in_flight());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_server_error_logs_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Registration failed"))
        .mount(&server)
        .await;

    let log = logger();
    let mut form = RegistrationForm::new(api_for(&server.uri()), Handle::current(), log.clone());
    form.username = "taken".to_string();
    form.password = "secret".to_string();
    let mut auth = AuthContext::new();
    let mut router = Router::default();

    form.submit();
    let outcome = resolve(&mut form, &mut auth, &mut router).await;

    assert_matches!(outcome, Some(RegistrationOutcome::Failed(ApiError::Status { status: 500, .. })));
    assert!(router.navigations().is_empty());

    let errors = log.get_entries_by_level(DebugLevel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context.as_deref(), Some("Registration failed"));
    // The password never reaches the diagnostics log.
    assert!(log.get_entries().iter().all(|e| !e.to_string().contains("secret")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_second_submit_while_in_flight_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "abc123"}))
                .set_delay(Duration::from_millis(150)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut form = filled_form(&server.uri());
    let mut auth = AuthContext::new();
    let mut router = Router::default();

    assert_eq!(form.submit(), SubmitOutcome::Sent);
    assert!(!form.can_submit());
    assert_eq!(form.submit(), SubmitOutcome::AlreadyInFlight);

    let outcome = resolve(&mut form, &mut auth, &mut router).await;
    assert_eq!(outcome, Some(RegistrationOutcome::Registered));
    assert_eq!(router.navigations(), &[Route::CityActions]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_empty_fields_refuse_submit_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = RegistrationForm::new(api_for(&server.uri()), Handle::current(), logger());
    assert!(!form.can_submit());
    assert_eq!(form.submit(), SubmitOutcome::MissingFields);

    form.username = "alice".to_string();
    assert_eq!(form.submit(), SubmitOutcome::MissingFields);

    form.username.clear();
    form.password = "secret".to_string();
    assert_eq!(form.submit(), SubmitOutcome::MissingFields);

    assert!(!form.is_in_flight());
    assert!(form.error().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_retry_after_failure_clears_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "second-try"})))
        .mount(&server)
        .await;

    let mut form = filled_form(&server.uri());
    let mut auth = AuthContext::new();
    let mut router = Router::default();

    form.submit();
    resolve(&mut form, &mut auth, &mut router).await;
    assert_eq!(form.error(), Some(REGISTRATION_FAILED));

    assert_eq!(form.submit(), SubmitOutcome::Sent);
    assert!(form.error().is_none());
    let outcome = resolve(&mut form, &mut auth, &mut router).await;
    assert_eq!(outcome, Some(RegistrationOutcome::Registered));
    assert_eq!(auth.token(), Some("second-try"));
}

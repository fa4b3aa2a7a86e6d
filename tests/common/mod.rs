#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::TestResponse;
use login_portal::domain::entities::{Credentials, LoginResponse, TokenPair};
use login_portal::domain::gateways::{AuthClient, AuthFailure, ErrorData};
use login_portal::infrastructure::notifications::FlashNotifier;
use login_portal::infrastructure::session::InMemorySessionStore;
use login_portal::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

/// Fixed 48-character session id used by tests that need a stable session.
pub const TEST_SESSION_ID: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUV";

/// Auth client that answers every call with the same result and counts calls.
pub struct StubAuthClient {
    result: Result<LoginResponse, AuthFailure>,
    calls: AtomicUsize,
}

impl StubAuthClient {
    pub fn succeeding(access: &str, refresh: &str) -> Self {
        Self {
            result: Ok(LoginResponse {
                token: TokenPair {
                    access: access.to_string(),
                    refresh: refresh.to_string(),
                },
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: AuthFailure) -> Self {
        Self {
            result: Err(failure),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting_with_message(message: &str) -> Self {
        Self::failing(AuthFailure::upstream(
            401,
            Some(ErrorData {
                message: Some(message.to_string()),
                detail: None,
            }),
        ))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthClient for StubAuthClient {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, AuthFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Auth client that parks every call until `release` is notified, then succeeds.
#[derive(Default)]
pub struct GatedAuthClient {
    pub calls: AtomicUsize,
    pub entered: Notify,
    pub release: Notify,
}

#[async_trait]
impl AuthClient for GatedAuthClient {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, AuthFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(LoginResponse {
            token: TokenPair {
                access: "A".to_string(),
                refresh: "R".to_string(),
            },
        })
    }
}

/// Application state backed by in-memory collaborators.
pub fn create_test_state(auth_client: Arc<dyn AuthClient>) -> (AppState, Arc<InMemorySessionStore>) {
    let ttl = Duration::from_secs(3600);
    let sessions = Arc::new(InMemorySessionStore::new(ttl));
    let state = AppState::new(
        auth_client,
        sessions.clone(),
        Arc::new(FlashNotifier::new(ttl)),
        false,
    );

    (state, sessions)
}

/// `Cookie` header carrying [`TEST_SESSION_ID`].
pub fn session_cookie() -> (HeaderName, HeaderValue) {
    cookie_for(TEST_SESSION_ID)
}

/// `Cookie` header carrying an arbitrary session id.
pub fn cookie_for(session_id: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("cookie"),
        HeaderValue::from_str(&format!("sid={session_id}")).unwrap(),
    )
}

/// Session id set by the response's `sid` cookie, if any.
pub fn issued_session_id(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| cookie.strip_prefix("sid="))
        .and_then(|rest| rest.split(';').next())
        .map(str::to_string)
}

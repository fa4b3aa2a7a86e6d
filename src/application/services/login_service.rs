//! Login form controller.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::entities::{
    AuthTokens, Credentials, FieldErrors, Notification, generate_session_id,
};
use crate::domain::gateways::{AuthClient, GENERIC_ERROR_MESSAGE, Notifier};
use crate::domain::repositories::SessionRepository;
use tracing::{error, info, warn};

/// Path the user is sent to after a successful login.
pub const HOME_PATH: &str = "/";

/// Path of the registration page linked from the form.
pub const REGISTER_PATH: &str = "/register";

/// Path of the login form itself.
pub const LOGIN_PATH: &str = "/login";

/// Notification text shown after a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// How a single submission settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Tokens were stored under the fresh `session_id`; the caller hands that
    /// id to the client and navigates to `redirect_to`.
    Authenticated {
        redirect_to: &'static str,
        session_id: String,
    },
    /// The authentication call (or storing its result) failed.
    Rejected { message: String },
    /// The schema rejected the input; nothing was sent.
    Invalid(FieldErrors),
    /// Another submission for the same form instance is still pending.
    AlreadySubmitting,
}

/// Drives one login form instance per session id.
///
/// A submission moves the instance from idle to submitting and back once it
/// settles. While submitting, further submissions for the same session are
/// ignored, which mirrors a submit control that is disabled in flight.
///
/// # Side effects per valid submission
///
/// - exactly one [`AuthClient::login`] call
/// - on success: one [`SessionRepository::set_auth`] write and one success notification
/// - on failure: one error notification, no store write
pub struct LoginService {
    auth_client: Arc<dyn AuthClient>,
    sessions: Arc<dyn SessionRepository>,
    notifier: Arc<dyn Notifier>,
    in_flight: Mutex<HashSet<String>>,
}

impl LoginService {
    pub fn new(
        auth_client: Arc<dyn AuthClient>,
        sessions: Arc<dyn SessionRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            auth_client,
            sessions,
            notifier,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Returns true while a submission for this session is pending.
    pub fn is_submitting(&self, session_id: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(session_id)
    }

    /// Validates and submits credentials on behalf of a session.
    ///
    /// # Flow
    ///
    /// 1. Ignore the call if a submission for `session_id` is in flight
    /// 2. Validate; on failure return the field messages without side effects
    /// 3. Call the authentication client
    /// 4. On success store the tokens under a newly minted session id, notify
    ///    that session, and ask for navigation home
    /// 5. On failure notify with the failure's user message
    ///
    /// Never retries; a rejected submission can be resubmitted right away.
    pub async fn submit(&self, session_id: &str, credentials: Credentials) -> LoginOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, session_id) else {
            warn!("Duplicate login submission ignored while one is pending");
            return LoginOutcome::AlreadySubmitting;
        };

        if let Err(errors) = credentials.check() {
            return LoginOutcome::Invalid(errors);
        }

        let response = match self.auth_client.login(&credentials).await {
            Ok(response) => response,
            Err(failure) => {
                warn!(
                    username = %credentials.username,
                    status = failure.status,
                    "Login failed: {}",
                    failure
                );
                let message = failure.user_message();
                self.notifier
                    .push(session_id, Notification::error(message.clone()))
                    .await;
                return LoginOutcome::Rejected { message };
            }
        };

        let tokens = AuthTokens::from(response);

        // The pre-login id may have been planted; tokens never go under it
        let authenticated_id = generate_session_id();

        if let Err(e) = self.sessions.set_auth(&authenticated_id, tokens).await {
            error!(username = %credentials.username, "Failed to store session tokens: {}", e);
            self.notifier
                .push(session_id, Notification::error(GENERIC_ERROR_MESSAGE))
                .await;
            return LoginOutcome::Rejected {
                message: GENERIC_ERROR_MESSAGE.to_string(),
            };
        }

        info!(username = %credentials.username, "Login successful");
        self.notifier
            .push(&authenticated_id, Notification::success(LOGIN_SUCCESS_MESSAGE))
            .await;

        LoginOutcome::Authenticated {
            redirect_to: HOME_PATH,
            session_id: authenticated_id,
        }
    }
}

/// Marks a session as submitting until dropped.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<String>>, key: &str) -> Option<Self> {
        let inserted = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string());

        inserted.then(|| Self {
            set,
            key: key.to_string(),
        })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::{LoginOutcome, REGISTER_PATH};
use crate::domain::entities::{FieldErrors, Notification};
use crate::state::AppState;
use crate::web::dto::LoginFormPayload;
use crate::web::middleware::session::SessionId;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Username and password inputs with inline validation messages
/// - Queued notifications
/// - Submit button (disabled while a submission is pending)
/// - Link to the registration page
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub username_error: Option<String>,
    pub password_error: Option<String>,
    pub notifications: Vec<Notification>,
    pub submitting: bool,
    pub register_path: &'static str,
}

impl LoginTemplate {
    fn new(username: String, errors: FieldErrors, notifications: Vec<Notification>) -> Self {
        Self {
            username,
            username_error: errors.username,
            password_error: errors.password,
            notifications,
            submitting: false,
            register_path: REGISTER_PATH,
        }
    }
}

/// Renders the empty login form.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> impl IntoResponse {
    let notifications = state.notifier.take(session_id.as_str()).await;

    LoginTemplate {
        submitting: state.login_service.is_submitting(session_id.as_str()),
        ..LoginTemplate::new(String::new(), FieldErrors::default(), notifications)
    }
}

/// Handles a login form submission.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Response Codes
///
/// - **303 See Other** to `/`: tokens stored under a new session id, which
///   the session layer sends as the `sid` cookie; success notification queued
/// - **200 OK**: authentication failed, form re-rendered with the error notification
/// - **422 Unprocessable Entity**: validation failed, inline field messages, nothing sent
/// - **409 Conflict**: a submission for this session is still pending, nothing done
///
/// The username is echoed back into the form; the password never is.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Form(payload): Form<LoginFormPayload>,
) -> Response {
    let username = payload.username.clone();

    match state
        .login_service
        .submit(session_id.as_str(), payload.into())
        .await
    {
        LoginOutcome::Authenticated {
            redirect_to,
            session_id,
        } => (Extension(SessionId(session_id)), Redirect::to(redirect_to)).into_response(),
        LoginOutcome::Rejected { .. } => {
            let notifications = state.notifier.take(session_id.as_str()).await;
            LoginTemplate::new(username, FieldErrors::default(), notifications).into_response()
        }
        LoginOutcome::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            LoginTemplate::new(username, errors, Vec::new()),
        )
            .into_response(),
        LoginOutcome::AlreadySubmitting => (
            StatusCode::CONFLICT,
            LoginTemplate {
                submitting: true,
                ..LoginTemplate::new(username, FieldErrors::default(), Vec::new())
            },
        )
            .into_response(),
    }
}

//! Application root page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State, response::IntoResponse};

use crate::domain::entities::Notification;
use crate::state::AppState;
use crate::web::middleware::session::SessionId;

/// Template for the application root.
///
/// Renders `templates/home.html` with the notifications queued for the
/// session (the login success message lands here).
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub notifications: Vec<Notification>,
}

/// Renders the application root.
///
/// # Endpoint
///
/// `GET /`
///
/// # Authentication
///
/// Protected via [`crate::web::middleware::web_auth`]; visitors without
/// stored tokens are redirected to `/login`.
pub async fn home_handler(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> impl IntoResponse {
    HomeTemplate {
        notifications: state.notifier.take(session_id.as_str()).await,
    }
}

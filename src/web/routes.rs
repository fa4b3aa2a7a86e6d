//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, login_page_handler, login_submit_handler};
use axum::{Router, routing::get};

/// Pages requiring an authenticated session.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /` - Application root
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

/// Pages reachable without a session.
///
/// # Endpoints
///
/// - `GET  /login` - Login form
/// - `POST /login` - Login form submission
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_submit_handler))
}

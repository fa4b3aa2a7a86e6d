//! HTTP-boundary error type for the web layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::application::services::LOGIN_PATH;
use crate::domain::gateways::GENERIC_ERROR_MESSAGE;
use crate::domain::repositories::SessionError;

/// Errors surfaced by web handlers and middleware.
///
/// # Responses
///
/// - [`AppError::Unauthenticated`] - `303 See Other` to the login page
/// - [`AppError::Session`] - `500 Internal Server Error` with the generic message
#[derive(Debug, Error)]
pub enum AppError {
    #[error("authentication required")]
    Unauthenticated,
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthenticated => Redirect::to(LOGIN_PATH).into_response(),
            AppError::Session(e) => {
                tracing::error!("Session store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE).into_response()
            }
        }
    }
}

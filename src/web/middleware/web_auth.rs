//! Session-based access check for application pages.

use axum::{
    Extension,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::session::SessionId;

/// Lets the request through only if the session store holds tokens for it.
///
/// Must run inside [`crate::web::middleware::session::layer`], which provides
/// the [`SessionId`] extension.
///
/// # Errors
///
/// - [`AppError::Unauthenticated`] (redirect to `/login`) if no tokens are stored
/// - [`AppError::Session`] if the store cannot be read
pub async fn layer(
    State(st): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match st.sessions.get_auth(session_id.as_str()).await? {
        Some(_) => Ok(next.run(req).await),
        None => Err(AppError::Unauthenticated),
    }
}

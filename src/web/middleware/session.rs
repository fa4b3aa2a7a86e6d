//! Session cookie middleware.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};

use crate::domain::entities::{generate_session_id, is_valid_session_id};
use crate::state::AppState;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "sid";

/// Session id of the current visitor, inserted into request extensions.
///
/// Also identifies the visitor's login form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ensures every request carries a [`SessionId`].
///
/// # Flow
///
/// 1. Read the `sid` cookie from the `Cookie` header
/// 2. Accept it if it is a 48-character alphanumeric value
/// 3. Otherwise mint a new id and append a `Set-Cookie` header to the response
///
/// A handler that replaces the session (after login) puts the new
/// [`SessionId`] into the response extensions; that id wins over a minted one.
///
/// # Cookie Format
///
/// ```text
/// Set-Cookie: sid=<id>; Path=/; HttpOnly; SameSite=Lax[; Secure]
/// ```
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let existing = read_cookie(req.headers(), SESSION_COOKIE).filter(|v| is_valid_session_id(v));

    let (session_id, minted) = match existing {
        Some(id) => (id, false),
        None => (generate_session_id(), true),
    };

    req.extensions_mut().insert(SessionId(session_id.clone()));

    let mut response = next.run(req).await;

    let issued = match response.extensions_mut().remove::<SessionId>() {
        Some(SessionId(rotated)) => Some(rotated),
        None if minted => Some(session_id),
        None => None,
    };

    if let Some(issued) = issued {
        match HeaderValue::from_str(&session_cookie(&issued, st.cookie_secure)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Invalid session cookie header: {}", e),
        }
    }

    response
}

/// Extracts a cookie value by name from the `Cookie` header(s).
///
/// Handles multiple cookies per header by splitting on semicolons.
fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name => Some(value.to_string()),
                _ => None,
            }
        })
}

fn session_cookie(session_id: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

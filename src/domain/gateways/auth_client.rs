//! Authentication client contract and its failure payload.

use crate::domain::entities::{Credentials, LoginResponse};
use async_trait::async_trait;
use std::fmt;

/// Message shown when a failure carries nothing more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "Error: Something went wrong!";

/// Server-provided fields of a failed login response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorData {
    pub message: Option<String>,
    pub detail: Option<String>,
}

/// Why a login request did not produce tokens.
///
/// Mirrors the shape every failure is reduced to before it reaches the
/// form: an optional HTTP status, the optional server body, and an optional
/// client-side error (transport or decoding).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFailure {
    pub status: Option<u16>,
    pub data: Option<ErrorData>,
    pub error: Option<String>,
}

impl AuthFailure {
    /// Failure with a server body.
    pub fn upstream(status: u16, data: Option<ErrorData>) -> Self {
        Self {
            status: Some(status),
            data,
            error: None,
        }
    }

    /// Failure raised on the client side before a usable response arrived.
    pub fn client(error: impl Into<String>) -> Self {
        Self {
            status: None,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Picks the text shown to the user.
    ///
    /// Order: `data.message`, `data.detail`, `error`, then
    /// [`GENERIC_ERROR_MESSAGE`]. Empty strings are skipped.
    pub fn user_message(&self) -> String {
        let data = self.data.as_ref();

        data.and_then(|d| non_empty(d.message.as_deref()))
            .or_else(|| data.and_then(|d| non_empty(d.detail.as_deref())))
            .or_else(|| non_empty(self.error.as_deref()))
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string()
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "login failed with status {status}: {}", self.user_message()),
            None => write!(f, "login failed: {}", self.user_message()),
        }
    }
}

impl std::error::Error for AuthFailure {}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Exchanges credentials for session tokens.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::HttpAuthClient`] - JSON over HTTP via `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Performs one login request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure`] for any non-success outcome; callers do not
    /// distinguish between rejection, server errors and transport errors.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthFailure>;
}

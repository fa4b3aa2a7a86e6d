//! Repository trait for the process-wide session store.

use crate::domain::entities::AuthTokens;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by session store backends.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store connection error: {0}")]
    Connection(String),
    #[error("session store operation error: {0}")]
    Operation(String),
    #[error("corrupt session record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type for session store operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Holder of authentication tokens, keyed by session id.
///
/// The login form only ever calls [`SessionRepository::set_auth`]; the
/// read side exists for the pages and tools that consume the session.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::InMemorySessionStore`] - Single-process map with TTL
/// - [`crate::infrastructure::session::RedisSessionStore`] - Redis `SET EX` records
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores the tokens for a session, replacing any previous pair.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backend rejects the write.
    async fn set_auth(&self, session_id: &str, tokens: AuthTokens) -> SessionResult<()>;

    /// Returns the tokens stored for a session, if any and not expired.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on backend failures or undecodable records.
    async fn get_auth(&self, session_id: &str) -> SessionResult<Option<AuthTokens>>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}

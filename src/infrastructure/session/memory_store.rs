//! In-process session store.

use crate::domain::entities::AuthTokens;
use crate::domain::repositories::{SessionRepository, SessionResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

struct StoredSession {
    tokens: AuthTokens,
    expires_at: Instant,
}

/// Session store backed by a map guarded by an async `RwLock`.
///
/// Entries expire after the configured TTL and are pruned lazily on write.
/// Sessions do not survive a restart and are not shared between instances;
/// use [`crate::infrastructure::session::RedisSessionStore`] for that.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, StoredSession>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        debug!("Using in-memory session store (TTL: {}s)", ttl.as_secs());
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        let now = Instant::now();
        self.sessions
            .read()
            .await
            .values()
            .filter(|s| s.expires_at > now)
            .count()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn set_auth(&self, session_id: &str, tokens: AuthTokens) -> SessionResult<()> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(
            session_id.to_string(),
            StoredSession {
                tokens,
                expires_at: now + self.ttl,
            },
        );

        debug!("Session stored ({} live)", sessions.len());
        Ok(())
    }

    async fn get_auth(&self, session_id: &str) -> SessionResult<Option<AuthTokens>> {
        let sessions = self.sessions.read().await;

        Ok(sessions
            .get(session_id)
            .filter(|s| s.expires_at > Instant::now())
            .map(|s| s.tokens.clone()))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));

        store
            .set_auth("sid-1", AuthTokens::new("A", "R"))
            .await
            .unwrap();

        let tokens = store.get_auth("sid-1").await.unwrap();
        assert_eq!(tokens, Some(AuthTokens::new("A", "R")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_none() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));

        assert!(store.get_auth("missing").await.unwrap().is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_set_replaces_previous_tokens() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));

        store.set_auth("sid", AuthTokens::new("A1", "R1")).await.unwrap();
        store.set_auth("sid", AuthTokens::new("A2", "R2")).await.unwrap();

        assert_eq!(
            store.get_auth("sid").await.unwrap(),
            Some(AuthTokens::new("A2", "R2"))
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_hidden() {
        let store = InMemorySessionStore::new(Duration::ZERO);

        store.set_auth("sid", AuthTokens::new("A", "R")).await.unwrap();

        assert!(store.get_auth("sid").await.unwrap().is_none());
        assert_eq!(store.len().await, 0);
    }
}

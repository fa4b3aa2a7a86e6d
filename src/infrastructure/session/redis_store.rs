//! Redis-backed session store.

use crate::domain::entities::AuthTokens;
use crate::domain::repositories::{SessionError, SessionRepository, SessionResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Session store keeping one JSON record per session under `session:<id>`.
///
/// Records are written with `SET EX`, so Redis expires them on its own.
/// Unlike a cache, failures propagate: a login whose tokens could not be
/// stored is reported as failed.
pub struct RedisSessionStore {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisSessionStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> SessionResult<Self> {
        info!("Connecting to Redis session store");

        let client = Client::open(redis_url).map_err(|e| {
            SessionError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            SessionError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| SessionError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis session store");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "session:".to_string(),
        })
    }

    fn build_key(&self, session_id: &str) -> String {
        format!("{}{}", self.key_prefix, session_id)
    }
}

#[async_trait]
impl SessionRepository for RedisSessionStore {
    async fn set_auth(&self, session_id: &str, tokens: AuthTokens) -> SessionResult<()> {
        let key = self.build_key(session_id);
        let record = serde_json::to_string(&tokens)?;
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, record, self.ttl_seconds)
            .await
            .map_err(|e| {
                warn!("Redis SET error for session: {}", e);
                SessionError::Operation(e.to_string())
            })?;

        debug!("Session stored (TTL: {}s)", self.ttl_seconds);
        Ok(())
    }

    async fn get_auth(&self, session_id: &str) -> SessionResult<Option<AuthTokens>> {
        let key = self.build_key(session_id);
        let mut conn = self.client.clone();

        let record = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| SessionError::Operation(e.to_string()))?;

        match record {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

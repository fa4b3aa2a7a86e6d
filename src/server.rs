//! HTTP server initialization and runtime setup.
//!
//! Handles session store setup, collaborator wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::SessionRepository;
use crate::infrastructure::auth::HttpAuthClient;
use crate::infrastructure::notifications::FlashNotifier;
use crate::infrastructure::session::{InMemorySessionStore, RedisSessionStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Session store (Redis, or in-memory fallback)
/// - HTTP client for the authentication API
/// - Flash notifier and login service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sessions = build_session_store(&config).await;

    let auth_client = Arc::new(HttpAuthClient::new(config.auth_api_url.clone()));
    tracing::info!("Authentication API: {}", auth_client.login_url());

    let state = AppState::new(
        auth_client,
        sessions,
        Arc::new(FlashNotifier::new(Duration::from_secs(config.session_ttl_seconds))),
        config.cookie_secure,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the session backend: Redis when configured and reachable, memory otherwise.
async fn build_session_store(config: &Config) -> Arc<dyn SessionRepository> {
    let ttl = config.session_ttl_seconds;

    if let Some(redis_url) = &config.redis_url {
        match RedisSessionStore::connect(redis_url, ttl).await {
            Ok(redis) => {
                tracing::info!("Session store: Redis");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory sessions.", e);
            }
        }
    } else {
        tracing::info!("Session store: in-memory");
    }

    Arc::new(InMemorySessionStore::new(Duration::from_secs(ttl)))
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

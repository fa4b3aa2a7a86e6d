//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LoginService;
use crate::domain::gateways::{AuthClient, Notifier};
use crate::domain::repositories::SessionRepository;

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub notifier: Arc<dyn Notifier>,
    /// Adds the `Secure` attribute to the session cookie.
    pub cookie_secure: bool,
}

impl AppState {
    /// Wires the login service to its collaborators.
    pub fn new(
        auth_client: Arc<dyn AuthClient>,
        sessions: Arc<dyn SessionRepository>,
        notifier: Arc<dyn Notifier>,
        cookie_secure: bool,
    ) -> Self {
        let login_service = Arc::new(LoginService::new(
            auth_client,
            sessions.clone(),
            notifier.clone(),
        ));

        Self {
            login_service,
            sessions,
            notifier,
            cookie_secure,
        }
    }
}

//! Notification sink contract.

use crate::domain::entities::Notification;
use async_trait::async_trait;

/// Fire-and-forget notifications addressed to one session.
///
/// Producers push; the page that renders next for that session takes the
/// queued notifications and shows them once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Queues a notification for the session.
    async fn push(&self, session_id: &str, notification: Notification);

    /// Removes and returns every queued notification for the session.
    async fn take(&self, session_id: &str) -> Vec<Notification>;
}

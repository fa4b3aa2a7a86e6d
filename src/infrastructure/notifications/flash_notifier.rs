//! Flash-message notifier.

use crate::domain::entities::Notification;
use crate::domain::gateways::Notifier;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct Queue {
    notifications: Vec<Notification>,
    expires_at: Instant,
}

/// Queues notifications per session until the next page render takes them.
///
/// Pending messages live in process memory and are lost on restart. A queue
/// nobody takes expires with the session TTL and is pruned on the next push.
pub struct FlashNotifier {
    queues: Mutex<HashMap<String, Queue>>,
    ttl: Duration,
}

impl FlashNotifier {
    /// Creates a notifier whose queues live for `ttl` after their last push.
    pub fn new(ttl: Duration) -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            ttl,
        }
    }
}

#[async_trait]
impl Notifier for FlashNotifier {
    async fn push(&self, session_id: &str, notification: Notification) {
        let now = Instant::now();
        let mut queues = self.queues.lock().await;

        queues.retain(|_, q| q.expires_at > now);

        let queue = queues.entry(session_id.to_string()).or_insert_with(|| Queue {
            notifications: Vec::new(),
            expires_at: now,
        });
        queue.notifications.push(notification);
        queue.expires_at = now + self.ttl;
    }

    async fn take(&self, session_id: &str) -> Vec<Notification> {
        let now = Instant::now();

        self.queues
            .lock()
            .await
            .remove(session_id)
            .filter(|q| q.expires_at > now)
            .map(|q| q.notifications)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn test_take_drains_in_order() {
        let notifier = FlashNotifier::new(HOUR);

        notifier.push("sid", Notification::error("first")).await;
        notifier.push("sid", Notification::success("second")).await;

        let taken = notifier.take("sid").await;
        assert_eq!(
            taken,
            vec![Notification::error("first"), Notification::success("second")]
        );
        assert!(notifier.take("sid").await.is_empty());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let notifier = FlashNotifier::new(HOUR);

        notifier.push("a", Notification::success("for a")).await;

        assert!(notifier.take("b").await.is_empty());
        assert_eq!(notifier.take("a").await.len(), 1);
    }

    #[tokio::test]
    async fn test_expired_queue_is_not_shown() {
        let notifier = FlashNotifier::new(Duration::ZERO);

        notifier.push("sid", Notification::success("stale")).await;

        assert!(notifier.take("sid").await.is_empty());
    }

    #[tokio::test]
    async fn test_untaken_queues_are_pruned_on_push() {
        let notifier = FlashNotifier::new(Duration::from_millis(20));

        for i in 0..200 {
            notifier
                .push(&format!("abandoned-{i}"), Notification::success("Login successful"))
                .await;
        }
        assert_eq!(notifier.queues.lock().await.len(), 200);

        tokio::time::sleep(Duration::from_millis(50)).await;
        notifier.push("fresh", Notification::success("Login successful")).await;

        let queues = notifier.queues.lock().await;
        assert_eq!(queues.len(), 1);
        assert!(queues.contains_key("fresh"));
    }
}

//! Notification engine: create, list, mark read.

use chrono::Utc;
use keyhour_core::types::DbId;

use crate::models::{Notification, NotificationKind};
use crate::store::{next_id, Collections, EngineResult, Store};

/// Provides notification operations.
pub struct NotificationEngine;

/// Append a notification to the collections. Used by the lifecycle
/// engines inside their own transactions so the notice commits (or
/// rolls back) together with the state change that caused it.
pub(crate) fn push_notification(
    c: &mut Collections,
    recipient_email: &str,
    message: String,
    kind: NotificationKind,
) -> Notification {
    let notification = Notification {
        id: next_id(c.notifications.iter().map(|n| n.id)),
        recipient_email: recipient_email.to_string(),
        message,
        kind,
        created_at: Utc::now(),
        read: false,
    };
    c.notifications.push(notification.clone());
    notification
}

impl NotificationEngine {
    /// Append a notification with a fresh sequential id, unread.
    pub async fn create(
        store: &Store,
        recipient_email: &str,
        message: &str,
        kind: NotificationKind,
    ) -> EngineResult<Notification> {
        store
            .update(|c| Ok(push_notification(c, recipient_email, message.to_string(), kind)))
            .await
    }

    /// List a user's notifications, most recent first.
    pub async fn list_for_user(
        store: &Store,
        email: &str,
        unread_only: bool,
    ) -> Vec<Notification> {
        store
            .read(|c| {
                let mut result: Vec<Notification> = c
                    .notifications
                    .iter()
                    .filter(|n| n.recipient_email == email)
                    .filter(|n| !unread_only || !n.read)
                    .cloned()
                    .collect();
                result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                result
            })
            .await
    }

    /// Flip the `read` flag. Returns `false` when the id is unknown.
    /// Idempotent: marking an already-read notification succeeds and
    /// leaves `read = true`.
    pub async fn mark_read(store: &Store, id: DbId) -> EngineResult<bool> {
        store
            .update(|c| {
                match c.notifications.iter_mut().find(|n| n.id == id) {
                    Some(notification) => {
                        notification.read = true;
                        Ok(true)
                    }
                    None => Ok(false),
                }
            })
            .await
    }
}

//! Notification entity model.

use keyhour_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

/// A record from the `notifications` collection.
///
/// Created by the lifecycle engines; only the `read` flag ever changes
/// afterwards, and it flips once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: DbId,
    pub recipient_email: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Timestamp,
    pub read: bool,
}

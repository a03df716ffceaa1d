//! In-app notification model.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// A notification shown in the portal's bell menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// Count the unread notifications in a fetched list.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

//! Notification entity - a per-user inbox message
//!
//! Notifications produced by the join-request workflow carry the request id
//! as a typed foreign key, so resolution can clean them up without parsing
//! the message text.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Read state of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Unread,
    Read,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Id,
    pub user_id: Id,
    pub message: String,
    pub status: NotificationStatus,
    pub request_id: Option<Id>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    #[inline]
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}

/// Fields for inserting a notification; the database assigns the id
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Id,
    pub message: String,
    pub request_id: Option<Id>,
}

/// Inbox message shown to a group owner when someone asks to join
pub fn join_request_message(requester_name: &str, group_name: &str) -> String {
    format!("{requester_name} has requested to join your group \"{group_name}\"")
}

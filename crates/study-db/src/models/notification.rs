//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub status: String,
    pub request_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

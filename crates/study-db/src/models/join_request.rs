//! Join request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for join_requests table
#[derive(Debug, Clone, FromRow)]
pub struct JoinRequestModel {
    pub id: i64,
    pub group_id: i64,
    pub user_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

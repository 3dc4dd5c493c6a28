//! JoinRequest entity - a pending ask to join a private study group
//!
//! Requests are never deleted when decided. They transition from `Pending`
//! to `Approved` or `Rejected` exactly once and keep their resolution
//! timestamp, so a second moderator acting on the same request gets a
//! conflict instead of silently re-resolving it.

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Lifecycle state of a join request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl JoinRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// The owner's decision on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinDecision {
    Approve,
    Reject,
}

impl JoinDecision {
    /// Status a pending request transitions to under this decision
    pub fn resolved_status(self) -> JoinRequestStatus {
        match self {
            Self::Approve => JoinRequestStatus::Approved,
            Self::Reject => JoinRequestStatus::Rejected,
        }
    }
}

/// Join request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub id: Id,
    pub group_id: Id,
    pub user_id: Id,
    pub status: JoinRequestStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl JoinRequest {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == JoinRequestStatus::Pending
    }
}

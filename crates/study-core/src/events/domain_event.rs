//! Domain events - events emitted when domain state changes
//!
//! These events feed the in-process broadcast bus so interested parties can
//! react to membership and schedule changes without polling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::JoinRequestStatus;
use crate::value_objects::Id;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    // =========================================================================
    // Group Events
    // =========================================================================
    GroupCreated(GroupCreatedEvent),
    GroupDeleted(GroupDeletedEvent),

    // =========================================================================
    // Membership Events
    // =========================================================================
    MemberJoined(MembershipEvent),
    MemberLeft(MembershipEvent),
    MemberRemoved(MemberRemovedEvent),

    // =========================================================================
    // Join Request Events
    // =========================================================================
    JoinRequested(JoinRequestedEvent),
    RequestResolved(RequestResolvedEvent),

    // =========================================================================
    // Meeting Events
    // =========================================================================
    MeetingCreated(MeetingEvent),
    MeetingUpdated(MeetingEvent),
    MeetingDeleted(MeetingEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::GroupCreated(_) => "GROUP_CREATED",
            Self::GroupDeleted(_) => "GROUP_DELETED",
            Self::MemberJoined(_) => "MEMBER_JOINED",
            Self::MemberLeft(_) => "MEMBER_LEFT",
            Self::MemberRemoved(_) => "MEMBER_REMOVED",
            Self::JoinRequested(_) => "JOIN_REQUESTED",
            Self::RequestResolved(_) => "REQUEST_RESOLVED",
            Self::MeetingCreated(_) => "MEETING_CREATED",
            Self::MeetingUpdated(_) => "MEETING_UPDATED",
            Self::MeetingDeleted(_) => "MEETING_DELETED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::GroupCreated(e) => e.timestamp,
            Self::GroupDeleted(e) => e.timestamp,
            Self::MemberJoined(e) | Self::MemberLeft(e) => e.timestamp,
            Self::MemberRemoved(e) => e.timestamp,
            Self::JoinRequested(e) => e.timestamp,
            Self::RequestResolved(e) => e.timestamp,
            Self::MeetingCreated(e) | Self::MeetingUpdated(e) | Self::MeetingDeleted(e) => {
                e.timestamp
            }
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCreatedEvent {
    pub group_id: Id,
    pub owner_id: Id,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDeletedEvent {
    pub group_id: Id,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipEvent {
    pub group_id: Id,
    pub user_id: Id,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRemovedEvent {
    pub group_id: Id,
    pub user_id: Id,
    pub removed_by: Id,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequestedEvent {
    pub request_id: Id,
    pub group_id: Id,
    pub user_id: Id,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestResolvedEvent {
    pub request_id: Id,
    pub group_id: Id,
    pub user_id: Id,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingEvent {
    pub meeting_id: Id,
    pub group_id: Id,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Event Creation Helpers
// ============================================================================

impl GroupCreatedEvent {
    pub fn new(group_id: Id, owner_id: Id) -> Self {
        Self {
            group_id,
            owner_id,
            timestamp: Utc::now(),
        }
    }
}

impl GroupDeletedEvent {
    pub fn new(group_id: Id) -> Self {
        Self {
            group_id,
            timestamp: Utc::now(),
        }
    }
}

impl MembershipEvent {
    pub fn new(group_id: Id, user_id: Id) -> Self {
        Self {
            group_id,
            user_id,
            timestamp: Utc::now(),
        }
    }
}

impl MemberRemovedEvent {
    pub fn new(group_id: Id, user_id: Id, removed_by: Id) -> Self {
        Self {
            group_id,
            user_id,
            removed_by,
            timestamp: Utc::now(),
        }
    }
}

impl JoinRequestedEvent {
    pub fn new(request_id: Id, group_id: Id, user_id: Id) -> Self {
        Self {
            request_id,
            group_id,
            user_id,
            timestamp: Utc::now(),
        }
    }
}

impl RequestResolvedEvent {
    pub fn new(request_id: Id, group_id: Id, user_id: Id, status: JoinRequestStatus) -> Self {
        Self {
            request_id,
            group_id,
            user_id,
            status: status.as_str().to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl MeetingEvent {
    pub fn new(meeting_id: Id, group_id: Id) -> Self {
        Self {
            meeting_id,
            group_id,
            timestamp: Utc::now(),
        }
    }
}

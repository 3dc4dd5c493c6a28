//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Database ids are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

// ============================================================================
// Study Group Responses
// ============================================================================

/// Study group with its live member count
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub course_code: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
    pub max_capacity: i32,
    pub is_private: bool,
    pub member_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of the transactional create-group bundle
#[derive(Debug, Clone, Serialize)]
pub struct CreatedGroupResponse {
    pub group: GroupResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_meeting: Option<MeetingResponse>,
}

/// Group member joined with user display fields
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub name: String,
    pub is_owner: bool,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Meeting Responses
// ============================================================================

/// Meeting row in wire shape: the `is_recurring` flag plus the date fields
/// of the active schedule shape only
#[derive(Debug, Clone, Serialize)]
pub struct MeetingResponse {
    pub id: String,
    pub group_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_days: Option<Vec<u8>>,
    /// Human-readable schedule line, e.g. `Monday and Wednesday · 2:00pm - 4:00pm`
    pub schedule_display: String,
    pub tag_ids: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Join Request Responses
// ============================================================================

/// Outcome of a join attempt: direct membership or a pending request
#[derive(Debug, Clone, Serialize)]
pub struct JoinOutcomeResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl JoinOutcomeResponse {
    /// The caller became a member right away
    pub fn joined() -> Self {
        Self {
            status: "joined".to_string(),
            request_id: None,
        }
    }

    /// The group is private; a pending request now awaits the owner
    pub fn requested(request_id: String) -> Self {
        Self {
            status: "requested".to_string(),
            request_id: Some(request_id),
        }
    }
}

/// Join request row, optionally decorated with display names
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequestResponse {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Set on the caller's own request listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Set on the owner's inbox listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_name: Option<String>,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Notification inbox row
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub message: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

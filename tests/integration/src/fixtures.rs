//! Test fixtures and data generators
//!
//! Provides reusable request payloads and wire-shape mirrors for
//! integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create study group request
#[derive(Debug, Serialize)]
pub struct CreateGroupPayload {
    pub name: String,
    pub description: Option<String>,
    pub course_code: String,
    pub max_capacity: i32,
    pub is_private: bool,
    pub initial_meeting: Option<InitialMeetingPayload>,
}

impl CreateGroupPayload {
    /// A public group with room for eight members
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Study Group {suffix}"),
            description: Some("A test study group".to_string()),
            course_code: "CS2040".to_string(),
            max_capacity: 8,
            is_private: false,
            initial_meeting: None,
        }
    }

    /// A private group; joining opens a request instead of a seat
    pub fn private() -> Self {
        let mut payload = Self::unique();
        payload.is_private = true;
        payload
    }

    /// A group whose seats run out quickly
    pub fn with_capacity(max_capacity: i32) -> Self {
        let mut payload = Self::unique();
        payload.max_capacity = max_capacity;
        payload
    }
}

/// Update study group request (partial)
#[derive(Debug, Default, Serialize)]
pub struct UpdateGroupPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub course_code: Option<String>,
    pub max_capacity: Option<i32>,
    pub is_private: Option<bool>,
}

/// Initial meeting bundled into group creation
#[derive(Debug, Serialize)]
pub struct InitialMeetingPayload {
    #[serde(flatten)]
    pub meeting: MeetingFields,
    pub tag_ids: Vec<String>,
}

/// Meeting fields shared by create, update, and initial-meeting payloads
#[derive(Debug, Clone, Serialize)]
pub struct MeetingFields {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub is_recurring: bool,
    pub meeting_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub recurrence_days: Option<Vec<u8>>,
}

impl MeetingFields {
    /// A single session on the given date
    pub fn one_time(name: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            location: Some("Library 2F".to_string()),
            start_time: "14:00:00".to_string(),
            end_time: "16:00:00".to_string(),
            is_recurring: false,
            meeting_date: Some(date.to_string()),
            start_date: None,
            end_date: None,
            recurrence_days: None,
        }
    }

    /// A weekly series between the given dates
    pub fn recurring(name: &str, start_date: &str, end_date: &str, days: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            location: None,
            start_time: "18:00:00".to_string(),
            end_time: "20:00:00".to_string(),
            is_recurring: true,
            meeting_date: None,
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
            recurrence_days: Some(days),
        }
    }
}

/// Create meeting request
#[derive(Debug, Serialize)]
pub struct CreateMeetingPayload {
    pub group_id: String,
    #[serde(flatten)]
    pub meeting: MeetingFields,
    pub tag_ids: Vec<String>,
}

impl CreateMeetingPayload {
    pub fn one_time(group_id: &str, name: &str, date: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            meeting: MeetingFields::one_time(name, date),
            tag_ids: Vec::new(),
        }
    }

    pub fn recurring(
        group_id: &str,
        name: &str,
        start_date: &str,
        end_date: &str,
        days: Vec<u8>,
    ) -> Self {
        Self {
            group_id: group_id.to_string(),
            meeting: MeetingFields::recurring(name, start_date, end_date, days),
            tag_ids: Vec::new(),
        }
    }
}

/// Study group response
#[derive(Debug, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub course_code: String,
    pub owner_id: String,
    pub university_id: Option<String>,
    pub max_capacity: i32,
    pub is_private: bool,
    pub member_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Group creation response with the optionally bundled meeting
#[derive(Debug, Deserialize)]
pub struct CreatedGroupResponse {
    pub group: GroupResponse,
    pub initial_meeting: Option<MeetingResponse>,
}

/// Member listing entry
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub name: String,
    pub is_owner: bool,
    pub joined_at: String,
}

/// Meeting response
#[derive(Debug, Deserialize)]
pub struct MeetingResponse {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub is_recurring: bool,
    pub meeting_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub recurrence_days: Option<Vec<u8>>,
    pub schedule_display: String,
    pub tag_ids: Vec<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Join outcome: either a granted seat or an opened request
#[derive(Debug, Deserialize)]
pub struct JoinOutcomeResponse {
    pub status: String,
    pub request_id: Option<String>,
}

/// Join request response
#[derive(Debug, Deserialize)]
pub struct JoinRequestResponse {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub status: String,
    pub created_at: String,
    pub resolved_at: Option<String>,
    pub group_name: Option<String>,
    pub requester_name: Option<String>,
}

/// Notification response
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub message: String,
    pub status: String,
    pub request_id: Option<String>,
    pub created_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

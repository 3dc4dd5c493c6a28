//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Meeting payloads carry the wire shape with its `is_recurring`
//! flag and per-shape date fields; conversion into the schedule union happens
//! in [`MeetingPayload::to_new_meeting`].

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use study_core::{DomainError, Id, MeetingSchedule, NewMeeting, NewStudyGroup, RecurrenceDays};

// ============================================================================
// Study Group Requests
// ============================================================================

/// Create study group request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Group name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Course code must be 1-50 characters"))]
    pub course_code: String,

    pub university_id: Option<Id>,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_capacity: i32,

    /// Private groups admit members through join requests
    #[serde(default)]
    pub is_private: bool,

    /// Optional first meeting, created in the same transaction as the group
    #[validate(nested)]
    pub initial_meeting: Option<InitialMeetingRequest>,
}

impl CreateGroupRequest {
    /// Split into the group insert and the optional bundled meeting
    pub fn into_parts(
        self,
        owner_id: Id,
    ) -> Result<(NewStudyGroup, Option<NewMeeting>), DomainError> {
        let initial_meeting = self
            .initial_meeting
            .map(|m| m.meeting.to_new_meeting(m.tag_ids))
            .transpose()?;
        let group = NewStudyGroup {
            name: self.name,
            description: self.description,
            course_code: self.course_code,
            owner_id,
            university_id: self.university_id,
            max_capacity: self.max_capacity,
            is_private: self.is_private,
        };
        Ok((group, initial_meeting))
    }
}

/// Initial meeting bundled into group creation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InitialMeetingRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub meeting: MeetingPayload,

    /// Existing tag ids to link to the meeting
    #[serde(default)]
    pub tag_ids: Vec<Id>,
}

/// Update study group request (partial; absent fields are left unchanged)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Group name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Course code must be 1-50 characters"))]
    pub course_code: Option<String>,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_capacity: Option<i32>,

    pub is_private: Option<bool>,
}

// ============================================================================
// Meeting Requests
// ============================================================================

/// Meeting fields shared by the create, update, and initial-meeting payloads
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MeetingPayload {
    #[validate(length(min = 1, max = 255, message = "Meeting name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    /// Selects the schedule shape and which date fields below are required
    pub is_recurring: bool,

    /// One-time meetings: the single session date
    pub meeting_date: Option<NaiveDate>,

    /// Recurring meetings: first and last calendar dates of the recurrence
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    /// Recurring meetings: weekday codes (0 = Sunday .. 6 = Saturday)
    pub recurrence_days: Option<Vec<u8>>,
}

impl MeetingPayload {
    /// Convert the flag-plus-fields wire shape into the schedule union
    pub fn schedule(&self) -> Result<MeetingSchedule, DomainError> {
        if self.is_recurring {
            let start_date = self.start_date.ok_or_else(|| {
                DomainError::ValidationError("recurring meetings require start_date".to_string())
            })?;
            let end_date = self.end_date.ok_or_else(|| {
                DomainError::ValidationError("recurring meetings require end_date".to_string())
            })?;
            let codes = self.recurrence_days.as_deref().ok_or_else(|| {
                DomainError::ValidationError(
                    "recurring meetings require recurrence_days".to_string(),
                )
            })?;
            let days = RecurrenceDays::from_codes(codes)
                .map_err(|e| DomainError::ValidationError(e.to_string()))?;
            Ok(MeetingSchedule::Recurring {
                start_date,
                end_date,
                days,
            })
        } else {
            let date = self.meeting_date.ok_or_else(|| {
                DomainError::ValidationError("one-time meetings require meeting_date".to_string())
            })?;
            Ok(MeetingSchedule::OneTime { date })
        }
    }

    /// Build the validated insert payload
    pub fn to_new_meeting(&self, tag_ids: Vec<Id>) -> Result<NewMeeting, DomainError> {
        let meeting = NewMeeting {
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            schedule: self.schedule()?,
            tag_ids,
        };
        meeting.validate()?;
        Ok(meeting)
    }
}

/// Create meeting request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMeetingRequest {
    pub group_id: Id,

    #[serde(flatten)]
    #[validate(nested)]
    pub meeting: MeetingPayload,

    /// Existing tag ids to link in the creation transaction
    #[serde(default)]
    pub tag_ids: Vec<Id>,
}

/// Update meeting request
///
/// The payload replaces every meeting field including the schedule shape;
/// switching between one-time and recurring clears the abandoned shape's
/// columns.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMeetingRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub meeting: MeetingPayload,
}

// ============================================================================
// Notification Requests
// ============================================================================

/// Inbox pagination query
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InboxQuery {
    /// Maximum notifications to return (defaults to 50, capped at 100)
    pub limit: Option<i64>,

    /// Return notifications with ids strictly below this cursor
    pub before: Option<Id>,
}

//! Mappers for converting domain entities to response DTOs

use study_core::agenda::schedule_summary;
use study_core::{
    GroupMember, Id, JoinRequest, Meeting, MeetingSchedule, Notification, StudyGroup, User,
};

use super::responses::{
    GroupResponse, JoinRequestResponse, MeetingResponse, MemberResponse, NotificationResponse,
};

// ============================================================================
// Aggregate helpers
// ============================================================================

/// Study group paired with its live member count
#[derive(Debug, Clone)]
pub struct GroupWithCount {
    pub group: StudyGroup,
    pub member_count: i64,
}

/// Membership row paired with the user's display fields
#[derive(Debug, Clone)]
pub struct MemberWithUser {
    pub member: GroupMember,
    pub user: User,
    pub is_owner: bool,
}

/// Meeting paired with its tag associations
#[derive(Debug, Clone)]
pub struct MeetingWithTags {
    pub meeting: Meeting,
    pub tag_ids: Vec<Id>,
}

// ============================================================================
// Group mappers
// ============================================================================

impl From<&GroupWithCount> for GroupResponse {
    fn from(g: &GroupWithCount) -> Self {
        Self {
            id: g.group.id.to_string(),
            name: g.group.name.clone(),
            description: g.group.description.clone(),
            course_code: g.group.course_code.clone(),
            owner_id: g.group.owner_id.to_string(),
            university_id: g.group.university_id.map(|id| id.to_string()),
            max_capacity: g.group.max_capacity,
            is_private: g.group.is_private,
            member_count: g.member_count,
            created_at: g.group.created_at,
            updated_at: g.group.updated_at,
        }
    }
}

impl From<GroupWithCount> for GroupResponse {
    fn from(g: GroupWithCount) -> Self {
        Self::from(&g)
    }
}

impl From<&MemberWithUser> for MemberResponse {
    fn from(m: &MemberWithUser) -> Self {
        Self {
            user_id: m.member.user_id.to_string(),
            name: m.user.display_name(),
            is_owner: m.is_owner,
            joined_at: m.member.joined_at,
        }
    }
}

impl From<MemberWithUser> for MemberResponse {
    fn from(m: MemberWithUser) -> Self {
        Self::from(&m)
    }
}

// ============================================================================
// Meeting mappers
// ============================================================================

impl From<&MeetingWithTags> for MeetingResponse {
    fn from(m: &MeetingWithTags) -> Self {
        let meeting = &m.meeting;
        let (meeting_date, start_date, end_date, recurrence_days) = match meeting.schedule {
            MeetingSchedule::OneTime { date } => (Some(date), None, None, None),
            MeetingSchedule::Recurring {
                start_date,
                end_date,
                days,
            } => (None, Some(start_date), Some(end_date), Some(days.codes())),
        };

        Self {
            id: meeting.id.to_string(),
            group_id: meeting.group_id.to_string(),
            name: meeting.name.clone(),
            description: meeting.description.clone(),
            location: meeting.location.clone(),
            start_time: meeting.start_time,
            end_time: meeting.end_time,
            is_recurring: meeting.schedule.is_recurring(),
            meeting_date,
            start_date,
            end_date,
            recurrence_days,
            schedule_display: schedule_summary(meeting),
            tag_ids: m.tag_ids.iter().map(ToString::to_string).collect(),
            created_by: meeting.created_by.to_string(),
            created_at: meeting.created_at,
            updated_at: meeting.updated_at,
        }
    }
}

impl From<MeetingWithTags> for MeetingResponse {
    fn from(m: MeetingWithTags) -> Self {
        Self::from(&m)
    }
}

// ============================================================================
// Join request mappers
// ============================================================================

impl From<&JoinRequest> for JoinRequestResponse {
    fn from(request: &JoinRequest) -> Self {
        Self {
            id: request.id.to_string(),
            group_id: request.group_id.to_string(),
            user_id: request.user_id.to_string(),
            status: request.status.as_str().to_string(),
            created_at: request.created_at,
            resolved_at: request.resolved_at,
            group_name: None,
            requester_name: None,
        }
    }
}

impl From<JoinRequest> for JoinRequestResponse {
    fn from(request: JoinRequest) -> Self {
        Self::from(&request)
    }
}

impl JoinRequestResponse {
    /// Decorate with the group's name (caller-side listing)
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    /// Decorate with the requester's display name (owner-side listing)
    pub fn with_requester_name(mut self, name: impl Into<String>) -> Self {
        self.requester_name = Some(name.into());
        self
    }
}

// ============================================================================
// Notification mappers
// ============================================================================

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            message: notification.message.clone(),
            status: notification.status.as_str().to_string(),
            request_id: notification.request_id.map(|id| id.to_string()),
            created_at: notification.created_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}

//! Meeting service
//!
//! Handles meeting scheduling within study groups, the agenda view, and the
//! creator-or-owner modification rule.

use chrono::Utc;
use study_core::agenda;
use study_core::events::MeetingEvent;
use study_core::{DomainError, DomainEvent, Id, Meeting, TimeFrame};
use tracing::{info, instrument};

use crate::dto::{CreateMeetingRequest, MeetingResponse, MeetingWithTags, UpdateMeetingRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Meeting service
pub struct MeetingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MeetingService<'a> {
    /// Create a new MeetingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Schedule a meeting in a group the caller belongs to
    #[instrument(skip(self, request))]
    pub async fn create_meeting(
        &self,
        caller_id: Id,
        request: CreateMeetingRequest,
    ) -> ServiceResult<MeetingResponse> {
        let group_id = request.group_id;

        let _group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !self.ctx.member_repo().is_member(group_id, caller_id).await? {
            return Err(DomainError::NotAMember.into());
        }

        let new_meeting = request.meeting.to_new_meeting(request.tag_ids)?;

        // Tag links land in the same transaction as the meeting row
        let meeting = self
            .ctx
            .meeting_repo()
            .create(group_id, caller_id, &new_meeting)
            .await?;

        info!(meeting_id = %meeting.id, group_id = %group_id, "Meeting created");

        // Publish MEETING_CREATED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::MeetingCreated(MeetingEvent::new(
                meeting.id, group_id,
            )));

        Ok(MeetingResponse::from(MeetingWithTags {
            meeting,
            tag_ids: new_meeting.tag_ids,
        }))
    }

    /// Meetings of a group (members only)
    ///
    /// Without a view the rows stay in storage order and the client derives
    /// its own split; with one, the agenda partition is applied server-side.
    #[instrument(skip(self))]
    pub async fn group_meetings(
        &self,
        group_id: Id,
        caller_id: Id,
        view: Option<TimeFrame>,
    ) -> ServiceResult<Vec<MeetingResponse>> {
        let _group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !self.ctx.member_repo().is_member(group_id, caller_id).await? {
            return Err(DomainError::NotAMember.into());
        }

        let meetings = self.ctx.meeting_repo().find_by_group(group_id).await?;

        let meetings = match view {
            None => meetings,
            Some(TimeFrame::Upcoming) => {
                agenda::partition(meetings, Utc::now().date_naive()).upcoming
            }
            Some(TimeFrame::Past) => agenda::partition(meetings, Utc::now().date_naive()).past,
        };

        let mut responses = Vec::with_capacity(meetings.len());
        for meeting in meetings {
            let tag_ids = self.ctx.meeting_repo().tag_ids(meeting.id).await?;
            responses.push(MeetingResponse::from(MeetingWithTags { meeting, tag_ids }));
        }

        Ok(responses)
    }

    /// Get a meeting by id
    #[instrument(skip(self))]
    pub async fn get_meeting(&self, meeting_id: Id) -> ServiceResult<MeetingResponse> {
        let meeting = self
            .ctx
            .meeting_repo()
            .find_by_id(meeting_id)
            .await?
            .ok_or(DomainError::MeetingNotFound(meeting_id))?;

        let tag_ids = self.ctx.meeting_repo().tag_ids(meeting_id).await?;

        Ok(MeetingResponse::from(MeetingWithTags { meeting, tag_ids }))
    }

    /// Replace every field of a meeting (creator or group owner only)
    ///
    /// Switching schedule shapes clears the abandoned shape's columns in the
    /// same update.
    #[instrument(skip(self, request))]
    pub async fn update_meeting(
        &self,
        meeting_id: Id,
        caller_id: Id,
        request: UpdateMeetingRequest,
    ) -> ServiceResult<MeetingResponse> {
        let mut meeting = self
            .ctx
            .meeting_repo()
            .find_by_id(meeting_id)
            .await?
            .ok_or(DomainError::MeetingNotFound(meeting_id))?;

        self.require_moderator(&meeting, caller_id).await?;

        // Tag links are fixed at creation, so the draft carries none
        let draft = request.meeting.to_new_meeting(Vec::new())?;
        meeting.name = draft.name;
        meeting.description = draft.description;
        meeting.location = draft.location;
        meeting.start_time = draft.start_time;
        meeting.end_time = draft.end_time;
        meeting.schedule = draft.schedule;
        meeting.updated_at = Utc::now();

        self.ctx.meeting_repo().update(&meeting).await?;

        info!(meeting_id = %meeting_id, "Meeting updated");

        // Publish MEETING_UPDATED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::MeetingUpdated(MeetingEvent::new(
                meeting_id,
                meeting.group_id,
            )));

        let tag_ids = self.ctx.meeting_repo().tag_ids(meeting_id).await?;

        Ok(MeetingResponse::from(MeetingWithTags { meeting, tag_ids }))
    }

    /// Delete a meeting (creator or group owner only)
    #[instrument(skip(self))]
    pub async fn delete_meeting(&self, meeting_id: Id, caller_id: Id) -> ServiceResult<()> {
        let meeting = self
            .ctx
            .meeting_repo()
            .find_by_id(meeting_id)
            .await?
            .ok_or(DomainError::MeetingNotFound(meeting_id))?;

        self.require_moderator(&meeting, caller_id).await?;

        self.ctx.meeting_repo().delete(meeting_id).await?;

        info!(meeting_id = %meeting_id, group_id = %meeting.group_id, "Meeting deleted");

        // Publish MEETING_DELETED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::MeetingDeleted(MeetingEvent::new(
                meeting_id,
                meeting.group_id,
            )));

        Ok(())
    }

    /// The meeting creator and the group owner may modify a meeting
    async fn require_moderator(&self, meeting: &Meeting, caller_id: Id) -> ServiceResult<()> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(meeting.group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(meeting.group_id))?;

        if !meeting.can_modify(caller_id, group.owner_id) {
            return Err(DomainError::NotMeetingModerator.into());
        }

        Ok(())
    }
}

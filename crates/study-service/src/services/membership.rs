//! Membership service
//!
//! Handles joining and leaving study groups, the join-request workflow for
//! private groups, and member listings.

use chrono::Utc;
use study_core::events::{
    JoinRequestedEvent, MemberRemovedEvent, MembershipEvent, RequestResolvedEvent,
};
use study_core::{
    join_request_message, DomainError, DomainEvent, Id, JoinDecision, JoinRequest,
    NewNotification, StudyGroup,
};
use tracing::{info, instrument};

use crate::dto::{JoinOutcomeResponse, JoinRequestResponse, MemberResponse, MemberWithUser};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Join a group, or open a join request when the group is private
    ///
    /// A full group rejects joins and requests alike, so the capacity check
    /// runs before the privacy branch.
    #[instrument(skip(self))]
    pub async fn join_group(
        &self,
        group_id: Id,
        user_id: Id,
    ) -> ServiceResult<JoinOutcomeResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if self.ctx.member_repo().is_member(group_id, user_id).await? {
            return Err(DomainError::AlreadyMember.into());
        }

        let member_count = self.ctx.member_repo().count_by_group(group_id).await?;
        if !group.has_space(member_count) {
            return Err(DomainError::GroupFull.into());
        }

        if group.is_private {
            let request = self.open_request(&group, user_id).await?;
            return Ok(JoinOutcomeResponse::requested(request.id.to_string()));
        }

        // The insert re-checks capacity under a row lock, so a racing join
        // cannot push the count past the limit
        self.ctx
            .member_repo()
            .join_within_capacity(group_id, user_id)
            .await?;

        info!(group_id = %group_id, user_id = %user_id, "Member joined group");

        // Publish MEMBER_JOINED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::MemberJoined(MembershipEvent::new(
                group_id, user_id,
            )));

        Ok(JoinOutcomeResponse::joined())
    }

    /// Open a join request without joining, regardless of the privacy flag
    #[instrument(skip(self))]
    pub async fn request_join(
        &self,
        group_id: Id,
        user_id: Id,
    ) -> ServiceResult<JoinRequestResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if self.ctx.member_repo().is_member(group_id, user_id).await? {
            return Err(DomainError::AlreadyMember.into());
        }

        let member_count = self.ctx.member_repo().count_by_group(group_id).await?;
        if !group.has_space(member_count) {
            return Err(DomainError::GroupFull.into());
        }

        let request = self.open_request(&group, user_id).await?;
        Ok(JoinRequestResponse::from(request))
    }

    /// Leave a group; owners must delete the group instead
    #[instrument(skip(self))]
    pub async fn leave_group(&self, group_id: Id, user_id: Id) -> ServiceResult<()> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if group.is_owner(user_id) {
            return Err(DomainError::OwnerCannotLeave.into());
        }

        self.ctx.member_repo().delete(group_id, user_id).await?;

        info!(group_id = %group_id, user_id = %user_id, "Member left group");

        // Publish MEMBER_LEFT event
        self.ctx
            .event_bus()
            .publish(DomainEvent::MemberLeft(MembershipEvent::new(
                group_id, user_id,
            )));

        Ok(())
    }

    /// Remove a member from the group (owner only)
    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        group_id: Id,
        member_id: Id,
        actor_id: Id,
    ) -> ServiceResult<()> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !group.is_owner(actor_id) {
            return Err(DomainError::NotGroupOwner.into());
        }

        if group.is_owner(member_id) {
            return Err(DomainError::OwnerCannotLeave.into());
        }

        self.ctx.member_repo().delete(group_id, member_id).await?;

        info!(group_id = %group_id, user_id = %member_id, removed_by = %actor_id, "Member removed from group");

        // Publish MEMBER_REMOVED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::MemberRemoved(MemberRemovedEvent::new(
                group_id, member_id, actor_id,
            )));

        Ok(())
    }

    /// List members with user display fields (members only)
    #[instrument(skip(self))]
    pub async fn list_members(
        &self,
        group_id: Id,
        caller_id: Id,
    ) -> ServiceResult<Vec<MemberResponse>> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !self.ctx.member_repo().is_member(group_id, caller_id).await? {
            return Err(DomainError::NotAMember.into());
        }

        let members = self.ctx.member_repo().find_by_group(group_id).await?;

        let mut responses = Vec::with_capacity(members.len());
        for member in members {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(member.user_id)
                .await?
                .ok_or(DomainError::UserNotFound(member.user_id))?;
            let is_owner = group.is_owner(member.user_id);
            responses.push(MemberResponse::from(MemberWithUser {
                member,
                user,
                is_owner,
            }));
        }

        Ok(responses)
    }

    /// Approve or reject a pending join request (owner only)
    #[instrument(skip(self))]
    pub async fn resolve_request(
        &self,
        group_id: Id,
        request_id: Id,
        decision: JoinDecision,
        actor_id: Id,
    ) -> ServiceResult<JoinRequestResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !group.is_owner(actor_id) {
            return Err(DomainError::NotGroupOwner.into());
        }

        // A request belonging to another group is invisible here
        let request = self
            .ctx
            .request_repo()
            .find_by_id(request_id)
            .await?
            .filter(|r| r.group_id == group_id)
            .ok_or(DomainError::RequestNotFound(request_id))?;

        let status = decision.resolved_status();

        // Guarded transition: only one resolution of a pending request wins
        if !self
            .ctx
            .request_repo()
            .mark_resolved(request_id, status)
            .await?
        {
            return Err(DomainError::RequestAlreadyResolved.into());
        }

        if matches!(decision, JoinDecision::Approve) {
            // The requester may already hold a seat, e.g. after the group
            // went public and they joined directly
            match self.ctx.member_repo().insert(group_id, request.user_id).await {
                Ok(_) | Err(DomainError::AlreadyMember) => {}
                Err(e) => return Err(e.into()),
            }
        }

        // The owner's inbox entry for this request is no longer actionable
        self.ctx
            .notification_repo()
            .delete_for_request(request_id)
            .await?;

        info!(
            request_id = %request_id,
            group_id = %group_id,
            status = status.as_str(),
            "Join request resolved"
        );

        // Publish REQUEST_RESOLVED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::RequestResolved(RequestResolvedEvent::new(
                request_id,
                group_id,
                request.user_id,
                status,
            )));

        let mut resolved = request;
        resolved.status = status;
        resolved.resolved_at = Some(Utc::now());
        Ok(JoinRequestResponse::from(resolved))
    }

    /// The caller's open requests, newest first, with group names
    #[instrument(skip(self))]
    pub async fn pending_for_user(&self, user_id: Id) -> ServiceResult<Vec<JoinRequestResponse>> {
        let requests = self.ctx.request_repo().pending_for_user(user_id).await?;

        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            let group = self
                .ctx
                .group_repo()
                .find_by_id(request.group_id)
                .await?
                .ok_or(DomainError::GroupNotFound(request.group_id))?;
            responses.push(JoinRequestResponse::from(&request).with_group_name(group.name));
        }

        Ok(responses)
    }

    /// Pending requests against a group, oldest first, with requester names
    /// (owner only)
    #[instrument(skip(self))]
    pub async fn pending_for_group(
        &self,
        group_id: Id,
        actor_id: Id,
    ) -> ServiceResult<Vec<JoinRequestResponse>> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !group.is_owner(actor_id) {
            return Err(DomainError::NotGroupOwner.into());
        }

        let requests = self.ctx.request_repo().pending_for_group(group_id).await?;

        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            let requester = self
                .ctx
                .user_repo()
                .find_by_id(request.user_id)
                .await?
                .ok_or(DomainError::UserNotFound(request.user_id))?;
            responses.push(
                JoinRequestResponse::from(&request)
                    .with_requester_name(requester.display_name()),
            );
        }

        Ok(responses)
    }

    /// Insert the pending request and notify the group owner
    async fn open_request(&self, group: &StudyGroup, user_id: Id) -> ServiceResult<JoinRequest> {
        let requester = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let request = self.ctx.request_repo().create(group.id, user_id).await?;

        let notification = NewNotification {
            user_id: group.owner_id,
            message: join_request_message(&requester.display_name(), &group.name),
            request_id: Some(request.id),
        };
        self.ctx.notification_repo().create(&notification).await?;

        info!(request_id = %request.id, group_id = %group.id, user_id = %user_id, "Join request opened");

        // Publish JOIN_REQUESTED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::JoinRequested(JoinRequestedEvent::new(
                request.id, group.id, user_id,
            )));

        Ok(request)
    }
}

//! Study group service
//!
//! Handles group creation, queries, updates, and deletion.

use study_core::events::{GroupCreatedEvent, GroupDeletedEvent};
use study_core::{DomainError, DomainEvent, Id};
use tracing::{info, instrument};

use crate::dto::{
    CreateGroupRequest, CreatedGroupResponse, GroupResponse, GroupWithCount, MeetingResponse,
    MeetingWithTags, UpdateGroupRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Study group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a study group
    ///
    /// The group row, the owner's membership, and the optional initial
    /// meeting with its tag links are inserted in one transaction.
    #[instrument(skip(self, request))]
    pub async fn create_group(
        &self,
        owner_id: Id,
        request: CreateGroupRequest,
    ) -> ServiceResult<CreatedGroupResponse> {
        let initial_tag_ids = request
            .initial_meeting
            .as_ref()
            .map(|m| m.tag_ids.clone())
            .unwrap_or_default();

        let (group, initial_meeting) = request.into_parts(owner_id)?;

        let created = self
            .ctx
            .group_repo()
            .create(&group, initial_meeting.as_ref())
            .await?;

        info!(group_id = %created.group.id, owner_id = %owner_id, "Study group created");

        // Publish GROUP_CREATED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::GroupCreated(GroupCreatedEvent::new(
                created.group.id,
                owner_id,
            )));

        let initial_meeting = created.initial_meeting.map(|meeting| {
            MeetingResponse::from(MeetingWithTags {
                meeting,
                tag_ids: initial_tag_ids,
            })
        });

        Ok(CreatedGroupResponse {
            // The creation transaction seeded exactly one member, the owner
            group: GroupResponse::from(GroupWithCount {
                group: created.group,
                member_count: 1,
            }),
            initial_meeting,
        })
    }

    /// Get a group with its live member count
    #[instrument(skip(self))]
    pub async fn get_group(&self, group_id: Id) -> ServiceResult<GroupResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        let member_count = self.ctx.member_repo().count_by_group(group_id).await?;

        Ok(GroupResponse::from(GroupWithCount {
            group,
            member_count,
        }))
    }

    /// Groups the user belongs to, with member counts
    #[instrument(skip(self))]
    pub async fn groups_for_user(&self, user_id: Id) -> ServiceResult<Vec<GroupResponse>> {
        let groups = self.ctx.group_repo().find_by_member(user_id).await?;

        let mut responses = Vec::with_capacity(groups.len());
        for group in groups {
            let member_count = self.ctx.member_repo().count_by_group(group.id).await?;
            responses.push(GroupResponse::from(GroupWithCount {
                group,
                member_count,
            }));
        }

        Ok(responses)
    }

    /// Update group settings (owner only)
    #[instrument(skip(self, request))]
    pub async fn update_group(
        &self,
        group_id: Id,
        actor_id: Id,
        request: UpdateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let mut group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !group.is_owner(actor_id) {
            return Err(DomainError::NotGroupOwner.into());
        }

        let member_count = self.ctx.member_repo().count_by_group(group_id).await?;

        let mut changed = false;

        if let Some(name) = request.name {
            group.set_name(name);
            changed = true;
        }

        if let Some(description) = request.description {
            group.set_description(Some(description));
            changed = true;
        }

        if let Some(course_code) = request.course_code {
            group.set_course_code(course_code);
            changed = true;
        }

        if let Some(max_capacity) = request.max_capacity {
            // Seated members keep their seats; the limit cannot undercut them
            if i64::from(max_capacity) < member_count {
                return Err(DomainError::ValidationError(format!(
                    "max_capacity {max_capacity} is below the current member count {member_count}"
                ))
                .into());
            }
            group.set_capacity(max_capacity);
            changed = true;
        }

        if let Some(is_private) = request.is_private {
            group.set_private(is_private);
            changed = true;
        }

        if changed {
            self.ctx.group_repo().update(&group).await?;
            info!(group_id = %group_id, "Study group updated");
        }

        Ok(GroupResponse::from(GroupWithCount {
            group,
            member_count,
        }))
    }

    /// Delete a group (owner only)
    ///
    /// Memberships, meetings, join requests, and their notifications are
    /// removed by the database cascades.
    #[instrument(skip(self))]
    pub async fn delete_group(&self, group_id: Id, actor_id: Id) -> ServiceResult<()> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        if !group.is_owner(actor_id) {
            return Err(DomainError::NotGroupOwner.into());
        }

        self.ctx.group_repo().delete(group_id).await?;

        info!(group_id = %group_id, "Study group deleted");

        // Publish GROUP_DELETED event
        self.ctx
            .event_bus()
            .publish(DomainEvent::GroupDeleted(GroupDeletedEvent::new(group_id)));

        Ok(())
    }
}

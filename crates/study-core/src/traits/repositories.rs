//! Repository traits - persistence ports implemented by the database layer
//!
//! Services depend on these traits, never on concrete repositories, so the
//! business rules can be tested against in-memory fakes.

use async_trait::async_trait;

use crate::entities::{
    GroupMember, JoinRequest, JoinRequestStatus, Meeting, NewMeeting, NewNotification,
    NewStudyGroup, NewUser, Notification, StudyGroup, User,
};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// =============================================================================
// User Repository
// =============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;
    async fn create(&self, user: &NewUser) -> RepoResult<User>;
}

// =============================================================================
// Study Group Repository
// =============================================================================

/// Result of the transactional group-creation bundle
#[derive(Debug, Clone)]
pub struct CreatedGroup {
    pub group: StudyGroup,
    pub initial_meeting: Option<Meeting>,
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<StudyGroup>>;

    /// Groups the given user is a member of
    async fn find_by_member(&self, user_id: Id) -> RepoResult<Vec<StudyGroup>>;

    /// Insert the group, the owner's membership row, and the optional initial
    /// meeting (with its tag links) in one transaction
    async fn create(
        &self,
        group: &NewStudyGroup,
        initial_meeting: Option<&NewMeeting>,
    ) -> RepoResult<CreatedGroup>;

    async fn update(&self, group: &StudyGroup) -> RepoResult<()>;
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// =============================================================================
// Membership Repository
// =============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn find(&self, group_id: Id, user_id: Id) -> RepoResult<Option<GroupMember>>;
    async fn find_by_group(&self, group_id: Id) -> RepoResult<Vec<GroupMember>>;
    async fn is_member(&self, group_id: Id, user_id: Id) -> RepoResult<bool>;
    async fn count_by_group(&self, group_id: Id) -> RepoResult<i64>;

    /// Plain membership insert; `AlreadyMember` on duplicate
    async fn insert(&self, group_id: Id, user_id: Id) -> RepoResult<GroupMember>;

    /// Capacity-checked insert: locks the group row, re-counts members inside
    /// the transaction, and fails with `GroupFull` when the count has reached
    /// `max_capacity`
    async fn join_within_capacity(&self, group_id: Id, user_id: Id) -> RepoResult<GroupMember>;

    async fn delete(&self, group_id: Id, user_id: Id) -> RepoResult<()>;
}

// =============================================================================
// Join Request Repository
// =============================================================================

#[async_trait]
pub trait JoinRequestRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<JoinRequest>>;

    /// The pending request of a user for a group, if any
    async fn find_pending(&self, group_id: Id, user_id: Id) -> RepoResult<Option<JoinRequest>>;

    /// Pending requests the given user has open, newest first
    async fn pending_for_user(&self, user_id: Id) -> RepoResult<Vec<JoinRequest>>;

    /// Pending requests against the given group, oldest first
    async fn pending_for_group(&self, group_id: Id) -> RepoResult<Vec<JoinRequest>>;

    /// Insert a pending request; `DuplicateRequest` when one is already open
    async fn create(&self, group_id: Id, user_id: Id) -> RepoResult<JoinRequest>;

    /// Transition a pending request to the given terminal status, stamping
    /// `resolved_at`. Returns `false` when the request was no longer pending,
    /// so concurrent resolutions cannot both succeed.
    async fn mark_resolved(&self, id: Id, status: JoinRequestStatus) -> RepoResult<bool>;
}

// =============================================================================
// Notification Repository
// =============================================================================

/// Cursor query for the notification inbox
#[derive(Debug, Clone, Copy)]
pub struct NotificationQuery {
    /// Maximum rows to return
    pub limit: i64,
    /// Return notifications with ids strictly below this cursor
    pub before: Option<Id>,
}

impl Default for NotificationQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            before: None,
        }
    }
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Notification>>;

    /// Inbox for a user, newest first
    async fn find_by_user(
        &self,
        user_id: Id,
        query: NotificationQuery,
    ) -> RepoResult<Vec<Notification>>;

    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification>;
    async fn mark_read(&self, id: Id) -> RepoResult<()>;
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Remove every notification referencing the given join request; returns
    /// the number of rows deleted
    async fn delete_for_request(&self, request_id: Id) -> RepoResult<u64>;
}

// =============================================================================
// Meeting Repository
// =============================================================================

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Meeting>>;

    /// All meetings of a group in storage order
    async fn find_by_group(&self, group_id: Id) -> RepoResult<Vec<Meeting>>;

    /// Insert the meeting and its tag links in one transaction
    async fn create(
        &self,
        group_id: Id,
        created_by: Id,
        meeting: &NewMeeting,
    ) -> RepoResult<Meeting>;

    /// Persist every column of the meeting, including the schedule shape
    async fn update(&self, meeting: &Meeting) -> RepoResult<()>;

    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// Tag ids associated with a meeting
    async fn tag_ids(&self, meeting_id: Id) -> RepoResult<Vec<Id>>;
}

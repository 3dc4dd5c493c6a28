//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Study group not found: {0}")]
    GroupNotFound(Id),

    #[error("Meeting not found: {0}")]
    MeetingNotFound(Id),

    #[error("Member not found in group")]
    MemberNotFound,

    #[error("Join request not found: {0}")]
    RequestNotFound(Id),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not group owner")]
    NotGroupOwner,

    #[error("Not the meeting creator or group owner")]
    NotMeetingModerator,

    #[error("Not a member of this group")]
    NotAMember,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already a member of this group")]
    AlreadyMember,

    #[error("A join request for this group is already pending")]
    DuplicateRequest,

    #[error("Study group is at maximum capacity")]
    GroupFull,

    #[error("Owners cannot leave their own group (delete it instead)")]
    OwnerCannotLeave,

    #[error("Join request has already been resolved")]
    RequestAlreadyResolved,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::MeetingNotFound(_) => "UNKNOWN_MEETING",
            Self::MemberNotFound => "UNKNOWN_MEMBER",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authorization
            Self::NotGroupOwner => "NOT_GROUP_OWNER",
            Self::NotMeetingModerator => "NOT_MEETING_MODERATOR",
            Self::NotAMember => "NOT_A_MEMBER",

            // Conflict
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::DuplicateRequest => "DUPLICATE_REQUEST",
            Self::GroupFull => "GROUP_FULL",
            Self::OwnerCannotLeave => "OWNER_CANNOT_LEAVE",
            Self::RequestAlreadyResolved => "REQUEST_ALREADY_RESOLVED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::GroupNotFound(_)
                | Self::MeetingNotFound(_)
                | Self::MemberNotFound
                | Self::RequestNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotGroupOwner | Self::NotMeetingModerator | Self::NotAMember
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyMember
                | Self::DuplicateRequest
                | Self::GroupFull
                | Self::OwnerCannotLeave
                | Self::RequestAlreadyResolved
        )
    }
}

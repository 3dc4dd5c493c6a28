//! # study-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod agenda;
pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use agenda::{AgendaView, TimeFrame};
pub use entities::{
    join_request_message, GroupMember, JoinDecision, JoinRequest, JoinRequestStatus, Meeting,
    MeetingSchedule, NewMeeting, NewNotification, NewStudyGroup, NewUser, Notification,
    NotificationStatus, StudyGroup, User,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    CreatedGroup, GroupRepository, JoinRequestRepository, MeetingRepository,
    MembershipRepository, NotificationQuery, NotificationRepository, RepoResult, UserRepository,
};
pub use value_objects::{DayCodeError, Id, IdParseError, RecurrenceDays};

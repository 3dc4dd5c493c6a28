//! Repository ports

pub mod repositories;

pub use repositories::{
    CreatedGroup, GroupRepository, JoinRequestRepository, MeetingRepository,
    MembershipRepository, NotificationQuery, NotificationRepository, RepoResult, UserRepository,
};

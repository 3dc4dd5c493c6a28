//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in study-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod group;
mod join_request;
mod meeting;
mod membership;
mod notification;
mod user;

pub use group::PgGroupRepository;
pub use join_request::PgJoinRequestRepository;
pub use meeting::PgMeetingRepository;
pub use membership::PgMembershipRepository;
pub use notification::PgNotificationRepository;
pub use user::PgUserRepository;

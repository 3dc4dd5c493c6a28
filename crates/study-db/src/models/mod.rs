//! Database models - SQLx-compatible structs for PostgreSQL tables

mod group;
mod join_request;
mod meeting;
mod membership;
mod notification;
mod user;

pub use group::StudyGroupModel;
pub use join_request::JoinRequestModel;
pub use meeting::MeetingModel;
pub use membership::GroupMemberModel;
pub use notification::NotificationModel;
pub use user::UserModel;

//! Domain entities

pub mod group;
pub mod join_request;
pub mod meeting;
pub mod membership;
pub mod notification;
pub mod user;

pub use group::{NewStudyGroup, StudyGroup};
pub use join_request::{JoinDecision, JoinRequest, JoinRequestStatus};
pub use meeting::{Meeting, MeetingSchedule, NewMeeting};
pub use membership::GroupMember;
pub use notification::{join_request_message, NewNotification, Notification, NotificationStatus};
pub use user::{NewUser, User};
